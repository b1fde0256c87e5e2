use strum::Display;

pub mod observers;
pub mod subject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SubjectEvent {
    StateChanged,
}
