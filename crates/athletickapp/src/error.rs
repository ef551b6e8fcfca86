use crate::commands::CommandError;
use crate::model::AthletickDate;
use thiserror::Error;

/// Domain failures raised by the model and its stores.
///
/// Every one of these is detected before the store is touched, so a failed
/// operation never leaves a partial mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("This athlete already exists in Athletick: {0}")]
    DuplicatePerson(String),

    #[error("Athlete not found: {0}")]
    PersonNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event already exists: {0}")]
    DuplicateEvent(String),

    #[error("A training session already exists on {0}")]
    DuplicateTraining(AthletickDate),

    #[error("There is no training session on {0}")]
    TrainingNotFound(AthletickDate),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ModelError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ModelError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AthletickError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AthletickError>;
