//! Error types

mod field;
mod validation;

pub use field::*;
pub use validation::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Typed field access failed.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// One or more fields failed form validation.
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The entity name does not match any table.
    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),

    /// A column key is not part of the table's columns.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// A filter name is not declared for the table.
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
