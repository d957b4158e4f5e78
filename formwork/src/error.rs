//! Error types for form composition and commit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{FormErrors, ModelErrors};

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors that are fatal to a single form call.
///
/// Validation failures are not represented here; they are returned as
/// [`FormErrors`] data from `validate` and `commit`.
#[derive(Debug, Error)]
pub enum FormError {
    /// No field exists for the requested key
    #[error("field not found: {key}")]
    FieldNotFound { key: String },

    /// The same key was selected twice
    #[error("duplicate field key: {key}")]
    DuplicateField { key: String },

    /// A fieldset references a key that has no field
    #[error("fieldset references unknown field: {key}")]
    UnknownFieldsetKey { key: String },

    /// The field schema names an editor type nobody registered
    #[error("no editor registered for type '{editor}' (field '{key}')")]
    UnknownEditor { editor: String, key: String },

    /// Invalid form configuration
    #[error("invalid form config: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The error a single field's validator reports.
///
/// Opaque to the form: it is stored, merged and returned, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Short machine-readable tag (`required`, `format`, `model`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// An error reported by a model-level validator.
    pub fn model(message: impl Into<String>) -> Self {
        Self::new("model", message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::model(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::model(message)
    }
}

/// A model refusing a write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The model validated the incoming values and found errors
    #[error("model rejected values: {0}")]
    Invalid(ModelErrors),

    /// A model-side guard refused the write
    #[error("model rejected write: {reason}")]
    Rejected { reason: String },
}

/// Why a [`Form::commit`](crate::Form::commit) did not write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    /// Validation failed; nothing was written
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(FormErrors),

    /// The model refused the write
    #[error(transparent)]
    Rejected(#[from] ModelError),

    /// The form has no model to write to
    #[error("form has no bound model")]
    Unbound,
}

impl CommitError {
    /// The validation report, if this was a validation failure.
    pub fn validation_errors(&self) -> Option<&FormErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}
