//! Error types for the quiz master
//!
//! Every failure a command can hit is one of these variants. Domain errors are
//! shown to the user as-is; storage and configuration errors carry their cause.

use crate::core::validation::FieldError;
use thiserror::Error;

/// Main error type for the quiz master
#[derive(Error, Debug)]
pub enum QuizError {
    /// Candidate question failed field validation
    #[error("{message}")]
    Validation {
        message: String,
        /// Names of the fields that failed, in report order
        fields: Vec<String>,
    },

    /// A live question already uses this number
    #[error("Question no {number} already existed!")]
    DuplicateQuestion { number: String },

    /// No live question has this number
    #[error("Question no {number} not found!")]
    NotFound { number: String },

    /// Submitted answer does not match the stored one
    #[error("Wrong Answer!")]
    IncorrectAnswer,

    /// Backing store failures, including unexpected affected-row counts
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl QuizError {
    /// Create a new validation error from failed field checks
    pub fn validation(errors: Vec<FieldError>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self::Validation {
            message,
            fields: errors.into_iter().map(|e| e.field.to_string()).collect(),
        }
    }

    /// Create a new duplicate question error
    pub fn duplicate(number: impl Into<String>) -> Self {
        Self::DuplicateQuestion {
            number: number.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(number: impl Into<String>) -> Self {
        Self::NotFound {
            number: number.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error is an expected outcome of a user request rather
    /// than a failure of the environment.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::DuplicateQuestion { .. }
                | Self::NotFound { .. }
                | Self::IncorrectAnswer
        )
    }
}

impl From<rusqlite::Error> for QuizError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, QuizError>;
