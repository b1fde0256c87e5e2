use std::rc::Rc;

use common::{
    console::Console,
    subject_observer::{ObserverList, SharedObserver, Subject, SubjectError},
};
use log::debug;

use crate::SubjectEvent;

use super::StateSource;

/// Holds a single digit of state and tells its observers whenever it changes.
pub struct ConcreteSubject {
    state: Option<u8>,
    observers: ObserverList<Self, SubjectEvent>,
    console: Rc<dyn Console>,
}

impl Subject<SubjectEvent> for ConcreteSubject {
    fn attach(&mut self, observer: SharedObserver<Self, SubjectEvent>) {
        self.console.print("Subject: Attached an observer.");
        self.observers.push(observer);
        debug!("Observer attached, {} now attached", self.observers.len());
    }

    fn detach(
        &mut self,
        observer: &SharedObserver<Self, SubjectEvent>,
    ) -> Result<(), SubjectError> {
        self.observers.remove(observer)?;
        debug!("Observer detached, {} still attached", self.observers.len());
        Ok(())
    }

    fn notify(&self, event: SubjectEvent) {
        self.console.print("Subject: Notifying observers...");
        debug!(
            "Notifying {} observers of {event} (state: {:?})",
            self.observers.len(),
            self.state
        );
        self.observers.broadcast(self, event);
    }
}

impl ConcreteSubject {
    pub fn new(console: Rc<dyn Console>) -> Self {
        ConcreteSubject {
            state: None,
            observers: ObserverList::default(),
            console,
        }
    }

    /// `None` until the first call to [`ConcreteSubject::some_business_logic`].
    pub fn state(&self) -> Option<u8> {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_attached(&self, observer: &SharedObserver<Self, SubjectEvent>) -> bool {
        self.observers.contains(observer)
    }

    pub fn some_business_logic(&mut self, source: &mut impl StateSource) {
        self.console.print("\nSubject: I'm doing something import.");
        let state = source.next_state();
        self.state = Some(state);

        self.console
            .print(&format!("Subject: My state has just changed to: {state}"));
        self.notify(SubjectEvent::StateChanged);
    }
}
