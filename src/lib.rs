//! # Quiz Master
//!
//! A command-line quiz utility. Questions are stored by number together with
//! a numeric answer, and can be listed, shown, answered and deleted.
//!
//! ## Features
//!
//! - Field validation before anything is written
//! - Answers accepted as digits or as English words, ignoring case
//! - Soft deletes in a SQLite store configured through `DB_*` variables
//!
//! ## Example
//!
//! ```no_run
//! use quiz_master::{core::QuestionService, store::SqliteQuestionRepository};
//!
//! let service = QuestionService::new(SqliteQuestionRepository::in_memory()?)?;
//! service.store("1", "How many wheels does a bicycle have?", "2")?;
//! service.answer_question("1", "two")?;
//! # Ok::<(), quiz_master::error::QuizError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Load a `.env` file from the working directory or its parents.
///
/// A missing file is fine; a file that cannot be read or parsed is an error.
/// Variables already set in the environment are never overridden.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load .env")),
    }
}

/// Initialize logging on stderr with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
