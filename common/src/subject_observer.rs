use std::rc::Rc;

use log::trace;
use thiserror::Error;

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E);
}

pub trait Subject<E: Clone>: Sized {
    fn attach(&mut self, observer: SharedObserver<Self, E>);
    fn detach(&mut self, observer: &SharedObserver<Self, E>) -> Result<(), SubjectError>;
    fn notify(&self, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub type SharedObservers<S, E> = Vec<SharedObserver<S, E>>;

#[derive(Error, Debug, PartialEq)]
pub enum SubjectError {
    #[error("Observer not found: it is not attached to this subject")]
    ObserverNotFound,
}

/// Ordered observer handles, compared by identity.
///
/// Duplicates are kept: attaching the same handle twice means it is notified twice,
/// and [`ObserverList::remove`] only drops the first occurrence.
pub struct ObserverList<S: Subject<E>, E: Clone> {
    observers: SharedObservers<S, E>,
}

impl<S: Subject<E>, E: Clone> Default for ObserverList<S, E> {
    fn default() -> Self {
        Self {
            observers: Default::default(),
        }
    }
}

impl<S: Subject<E>, E: Clone> ObserverList<S, E> {
    pub fn push(&mut self, observer: SharedObserver<S, E>) {
        self.observers.push(observer);
    }

    pub fn remove(&mut self, observer: &SharedObserver<S, E>) -> Result<(), SubjectError> {
        let index = self
            .observers
            .iter()
            .position(|obs| Rc::ptr_eq(obs, observer))
            .ok_or(SubjectError::ObserverNotFound)?;
        self.observers.remove(index);
        Ok(())
    }

    pub fn contains(&self, observer: &SharedObserver<S, E>) -> bool {
        self.observers.iter().any(|obs| Rc::ptr_eq(obs, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn broadcast(&self, source: &S, event: E) {
        for (index, obs) in self.observers.iter().enumerate() {
            trace!("Dispatching update to observer #{index}");
            obs.update(source, event.clone());
        }
    }
}
