use std::rc::Rc;

use common::{console::Console, subject_observer::Observer};

use crate::{subject::ConcreteSubject, SubjectEvent};

/// Reacts to every notification, whatever the subject state.
pub struct ConcreteObserverB {
    console: Rc<dyn Console>,
}

impl ConcreteObserverB {
    pub fn new(console: Rc<dyn Console>) -> Self {
        ConcreteObserverB { console }
    }
}

impl Observer<ConcreteSubject, SubjectEvent> for ConcreteObserverB {
    fn update(&self, _: &ConcreteSubject, _: SubjectEvent) {
        self.console.print("ConcreteObserverB: Reacted to the event");
    }
}
