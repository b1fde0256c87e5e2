use std::rc::Rc;

use common::{console::Console, subject_observer::Observer};
use log::trace;

use crate::{subject::ConcreteSubject, SubjectEvent};

/// States strictly below this value make [`ConcreteObserverA`] react.
pub const REACTION_THRESHOLD: u8 = 3;

pub struct ConcreteObserverA {
    console: Rc<dyn Console>,
}

impl ConcreteObserverA {
    pub fn new(console: Rc<dyn Console>) -> Self {
        ConcreteObserverA { console }
    }
}

impl Observer<ConcreteSubject, SubjectEvent> for ConcreteObserverA {
    fn update(&self, source: &ConcreteSubject, event: SubjectEvent) {
        if source
            .state()
            .is_some_and(|state| state < REACTION_THRESHOLD)
        {
            self.console.print("ConcreteObserverA: Reacted to the event");
        } else {
            trace!("ConcreteObserverA ignored {event} (state: {:?})", source.state());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::{Observer, Subject};
    use common_test::RecordingConsole;

    use crate::{
        subject::{test_utils::ScriptedStates, ConcreteSubject, MAX_STATE},
        SubjectEvent,
    };

    use super::{ConcreteObserverA, REACTION_THRESHOLD};

    const REACTION: &str = "ConcreteObserverA: Reacted to the event";

    fn subject_in_state(state: u8) -> ConcreteSubject {
        let mut subject = ConcreteSubject::new(Rc::new(RecordingConsole::new()));
        subject.some_business_logic(&mut ScriptedStates::new(vec![state]));
        subject
    }

    #[test]
    fn test_concrete_observer_a_reacts_only_below_threshold() {
        for state in 0..=MAX_STATE {
            // Given
            let console = Rc::new(RecordingConsole::new());
            let observer = ConcreteObserverA::new(console.clone());
            let subject = subject_in_state(state);

            // When
            observer.update(&subject, SubjectEvent::StateChanged);

            // Then
            let expected = usize::from(state < REACTION_THRESHOLD);
            assert_eq!(
                expected,
                console.count(REACTION),
                "Should react iff state {state} is below {REACTION_THRESHOLD}"
            );
        }
    }

    #[test]
    fn test_concrete_observer_a_boundaries() {
        // Given
        let console = Rc::new(RecordingConsole::new());
        let observer = ConcreteObserverA::new(console.clone());

        // When
        observer.update(&subject_in_state(3), SubjectEvent::StateChanged);

        // Then
        assert!(console.lines().is_empty(), "Should not react at 3");

        // When
        observer.update(&subject_in_state(2), SubjectEvent::StateChanged);

        // Then
        assert_eq!(vec![REACTION], console.lines(), "Should react at 2");
    }

    #[test]
    fn test_concrete_observer_a_ignores_unset_state() {
        // Given
        let console = Rc::new(RecordingConsole::new());
        let observer: Rc<ConcreteObserverA> = Rc::new(ConcreteObserverA::new(console.clone()));
        let mut subject = ConcreteSubject::new(Rc::new(RecordingConsole::new()));
        subject.attach(observer);

        // When
        subject.notify(SubjectEvent::StateChanged);

        // Then
        assert!(
            console.lines().is_empty(),
            "Should not react before the subject has a state"
        );
    }
}
