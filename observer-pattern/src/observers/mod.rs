mod concrete_observer_a;
mod concrete_observer_b;

pub use concrete_observer_a::{ConcreteObserverA, REACTION_THRESHOLD};
pub use concrete_observer_b::ConcreteObserverB;
