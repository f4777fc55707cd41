use thiserror::Error;

/// Errors that can occur while building drafts or computing totals.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillsumError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Totals arithmetic could not be carried out.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// JSON import or export error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into a single `BillsumError::Validation`.
pub(crate) fn join_errors(errors: &[ValidationError]) -> BillsumError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    BillsumError::Validation(msg)
}
