//! Field validation for candidate questions
//!
//! Each call builds its own list of field errors; nothing is carried over
//! between calls.

use crate::{
    core::question::Question,
    error::{QuizError, Result},
};
use regex::Regex;
use tracing::{debug, instrument};

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is a required field"),
        }
    }

    fn numeric(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} must be a valid numeric value"),
        }
    }
}

/// Validates questions before they reach storage
#[derive(Debug, Clone)]
pub struct QuestionValidator {
    re_numeric: Regex,
}

impl QuestionValidator {
    /// Create a new validator
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_numeric: Regex::new(r"^[0-9]+$")
                .map_err(|e| QuizError::config(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Check every field and report all failures at once
    #[instrument(skip(self, question), fields(number = %question.number))]
    pub fn validate(&self, question: &Question) -> Result<()> {
        let errors = self.field_errors(question);
        if errors.is_empty() {
            return Ok(());
        }

        debug!("Question failed validation on {} field(s)", errors.len());
        Err(QuizError::validation(errors))
    }

    /// Collect field errors in number, question, answer order
    pub fn field_errors(&self, question: &Question) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Some(e) = self.check_numeric("Number", &question.number) {
            errors.push(e);
        }
        if question.question.is_empty() {
            errors.push(FieldError::required("Question"));
        }
        if let Some(e) = self.check_numeric("Answer", &question.answer) {
            errors.push(e);
        }

        errors
    }

    fn check_numeric(&self, field: &'static str, value: &str) -> Option<FieldError> {
        if value.is_empty() {
            Some(FieldError::required(field))
        } else if !self.re_numeric.is_match(value) {
            Some(FieldError::numeric(field))
        } else {
            None
        }
    }
}
