//! Command-line argument parsing

use clap::{Parser, Subcommand};

/// Quiz Master - store numbered questions and answer them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "quiz_master")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Database file, overrides DB_NAME
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show a question and its answer
    #[command(name = "question")]
    Question {
        /// Question number
        number: String,
    },

    /// Answer a question
    #[command(name = "answer_question")]
    AnswerQuestion {
        /// Question number
        number: String,
        /// Your answer, as digits or words
        answer: String,
    },

    /// Create a new question
    #[command(name = "create_question")]
    CreateQuestion {
        /// Question number
        number: String,
        /// Question text
        question: String,
        /// Numeric answer
        answer: String,
    },

    /// Delete a question
    #[command(name = "delete_question")]
    DeleteQuestion {
        /// Question number
        number: String,
    },

    /// List all questions
    #[command(name = "list_question")]
    ListQuestion,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
