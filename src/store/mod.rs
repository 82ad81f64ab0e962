//! Persistence gateway
//!
//! The service only sees [`QuestionRepository`]; [`SqliteQuestionRepository`]
//! is the shipped backend.

pub mod sqlite;

pub use sqlite::SqliteQuestionRepository;

use crate::{core::Question, error::Result};

/// Storage operations the question service needs
#[cfg_attr(test, mockall::automock)]
pub trait QuestionRepository {
    /// All live questions, ordered by ascending number
    fn list(&self) -> Result<Vec<Question>>;

    /// Persist a new question. Fails unless exactly one row is written.
    fn insert(&self, question: &Question) -> Result<()>;

    /// The live question with this number, if any
    fn fetch_by_number(&self, number: &str) -> Result<Option<Question>>;

    /// Delete the live question with this number. Fails unless exactly one
    /// row is affected.
    fn delete_by_number(&self, number: &str) -> Result<()>;
}
