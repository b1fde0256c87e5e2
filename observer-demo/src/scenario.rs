use std::rc::Rc;

use common::{
    console::Console,
    subject_observer::{SharedObserver, Subject},
};
use log::info;
use observer_pattern::{
    observers::{ConcreteObserverA, ConcreteObserverB},
    subject::{ConcreteSubject, StateSource},
    SubjectEvent,
};

use crate::error::AppError;

const ROUNDS_BEFORE_DETACH: usize = 2;
const ROUNDS_AFTER_DETACH: usize = 1;

/// Wires one subject to both observers, runs the business logic twice, then
/// drops observer A and runs it once more.
pub fn run(console: Rc<dyn Console>, source: &mut impl StateSource) -> Result<(), AppError> {
    let mut subject = ConcreteSubject::new(console.clone());

    let observer_a: SharedObserver<ConcreteSubject, SubjectEvent> =
        Rc::new(ConcreteObserverA::new(console.clone()));
    subject.attach(observer_a.clone());

    let observer_b: SharedObserver<ConcreteSubject, SubjectEvent> =
        Rc::new(ConcreteObserverB::new(console));
    subject.attach(observer_b);

    for _ in 0..ROUNDS_BEFORE_DETACH {
        subject.some_business_logic(source);
    }

    subject.detach(&observer_a)?;
    info!("Observer A detached, {} left", subject.observer_count());

    for _ in 0..ROUNDS_AFTER_DETACH {
        subject.some_business_logic(source);
    }
    Ok(())
}
