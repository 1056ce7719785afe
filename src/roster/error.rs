use crate::model::StudentId;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Stored roster changed since it was loaded; reload and retry")]
    Conflict,

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        RosterError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
