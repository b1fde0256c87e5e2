mod concrete_subject;
mod state_source;

pub use concrete_subject::ConcreteSubject;
pub use state_source::{Random, StateSource, MAX_STATE};

#[cfg(any(test, feature = "test-utils"))]
pub use state_source::test_utils;
