//! Core quiz functionality
//!
//! Contains the question entity, field validation, answer checking and the
//! use-case service that ties them to storage.

pub mod answer;
pub mod question;
pub mod service;
pub mod validation;

pub use question::Question;
pub use service::QuestionService;
pub use validation::{FieldError, QuestionValidator};
