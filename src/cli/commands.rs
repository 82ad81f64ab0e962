//! Command implementations for the CLI

use crate::{
    cli::Command,
    core::{Question, QuestionService},
    error::QuizError,
    store::QuestionRepository,
};
use anyhow::Context;
use std::io::Write;
use tracing::{instrument, warn};

/// Execute the appropriate command, writing its output to `out`.
///
/// Errors from the question service are reported on `out` and do not fail the
/// call; only write failures do.
#[instrument(skip(service, out))]
pub fn execute_command<R, W>(
    service: &QuestionService<R>,
    command: &Command,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: QuestionRepository,
    W: Write,
{
    let written = match command {
        Command::Question { number } => execute_question_command(service, number, out),
        Command::AnswerQuestion { number, answer } => {
            execute_answer_command(service, number, answer, out)
        }
        Command::CreateQuestion {
            number,
            question,
            answer,
        } => execute_create_command(service, number, question, answer, out),
        Command::DeleteQuestion { number } => execute_delete_command(service, number, out),
        Command::ListQuestion => execute_list_command(service, out),
    };
    written.context("Failed to write command output")
}

fn report_error<W: Write>(err: &QuizError, out: &mut W) -> std::io::Result<()> {
    if !err.is_domain() {
        warn!("Command failed: {err:?}");
    }
    writeln!(out, "{err}")
}

/// Execute the question command
fn execute_question_command<R: QuestionRepository, W: Write>(
    service: &QuestionService<R>,
    number: &str,
    out: &mut W,
) -> std::io::Result<()> {
    match service.get_by_number(number) {
        Ok(q) => writeln!(out, "Q : {}\nA : {}", q.question, q.answer),
        Err(e) => report_error(&e, out),
    }
}

/// Execute the answer command
fn execute_answer_command<R: QuestionRepository, W: Write>(
    service: &QuestionService<R>,
    number: &str,
    answer: &str,
    out: &mut W,
) -> std::io::Result<()> {
    match service.answer_question(number, answer) {
        Ok(()) => writeln!(out, "Correct!"),
        Err(e) => report_error(&e, out),
    }
}

/// Execute the create command
fn execute_create_command<R: QuestionRepository, W: Write>(
    service: &QuestionService<R>,
    number: &str,
    question: &str,
    answer: &str,
    out: &mut W,
) -> std::io::Result<()> {
    match service.store(number, question, answer) {
        Ok(()) => writeln!(
            out,
            "Question no {number} created :\nQ : {question}\nA : {answer}"
        ),
        Err(e) => report_error(&e, out),
    }
}

/// Execute the delete command
fn execute_delete_command<R: QuestionRepository, W: Write>(
    service: &QuestionService<R>,
    number: &str,
    out: &mut W,
) -> std::io::Result<()> {
    match service.destroy(number) {
        Ok(()) => writeln!(out, "Question no {number} was deleted!"),
        Err(e) => report_error(&e, out),
    }
}

/// Execute the list command. The table is printed even when listing fails.
fn execute_list_command<R: QuestionRepository, W: Write>(
    service: &QuestionService<R>,
    out: &mut W,
) -> std::io::Result<()> {
    let questions = match service.get_all() {
        Ok(questions) => questions,
        Err(e) => {
            report_error(&e, out)?;
            Vec::new()
        }
    };
    write_question_table(&questions, out)
}

/// Render questions as the tab separated listing table
pub fn write_question_table<W: Write>(questions: &[Question], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "No |\tQuestion\t|\tAnswer")?;
    for q in questions {
        writeln!(out, "{}\t{}\t\t\t{}", q.number, q.question, q.answer)?;
    }
    writeln!(out)
}
