use common::subject_observer::SubjectError;
use config::ConfigError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ValidationErrors),
    #[error(transparent)]
    Subject(#[from] SubjectError),
}
