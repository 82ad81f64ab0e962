//! SQLite question store
//!
//! Deletes are logical: `deleted_at` is stamped and the row is left in place.
//! Every read filters on `deleted_at IS NULL`.

use crate::{
    config::DatabaseConfig,
    core::Question,
    error::{QuizError, Result},
    store::QuestionRepository,
};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info, instrument};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    number TEXT NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    deleted_at TEXT
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_questions_live_number
    ON questions(number) WHERE deleted_at IS NULL;
"#;

/// [`QuestionRepository`] backed by a SQLite connection
pub struct SqliteQuestionRepository {
    conn: Connection,
}

impl SqliteQuestionRepository {
    /// Open the database named by the configuration and make sure the
    /// questions table exists
    #[instrument(skip(config), fields(dsn = %config.dsn()))]
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        info!("Opening question store");
        let conn = Connection::open(&config.name)?;
        Self::from_connection(conn)
    }

    /// Private in-memory store, mostly for tests
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the table if needed
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
        Ok(Question {
            id: Some(row.get(0)?),
            number: row.get(1)?,
            question: row.get(2)?,
            answer: row.get(3)?,
        })
    }

    fn expect_one_row(affected: usize) -> Result<()> {
        if affected != 1 {
            return Err(QuizError::storage(format!(
                "expected to affect 1 row, affected {affected}"
            )));
        }
        Ok(())
    }
}

impl QuestionRepository for SqliteQuestionRepository {
    #[instrument(skip(self))]
    fn list(&self) -> Result<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, number, question, answer FROM questions \
             WHERE deleted_at IS NULL \
             ORDER BY CAST(number AS INTEGER) ASC, number ASC",
        )?;
        let questions = stmt
            .query_map([], Self::row_to_question)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("Listed {} question(s)", questions.len());
        Ok(questions)
    }

    #[instrument(skip(self, question), fields(number = %question.number))]
    fn insert(&self, question: &Question) -> Result<()> {
        let affected = self.conn.execute(
            "INSERT INTO questions (number, question, answer) VALUES (?1, ?2, ?3)",
            params![question.number, question.question, question.answer],
        )?;
        Self::expect_one_row(affected)?;

        debug!("Inserted question row {}", self.conn.last_insert_rowid());
        Ok(())
    }

    #[instrument(skip(self))]
    fn fetch_by_number(&self, number: &str) -> Result<Option<Question>> {
        let question = self
            .conn
            .query_row(
                "SELECT id, number, question, answer FROM questions \
                 WHERE number = ?1 AND deleted_at IS NULL",
                params![number],
                Self::row_to_question,
            )
            .optional()?;
        Ok(question)
    }

    #[instrument(skip(self))]
    fn delete_by_number(&self, number: &str) -> Result<()> {
        let deleted_at = Utc::now().to_rfc3339();
        let affected = self.conn.execute(
            "UPDATE questions SET deleted_at = ?1 WHERE number = ?2 AND deleted_at IS NULL",
            params![deleted_at, number],
        )?;
        Self::expect_one_row(affected)?;

        debug!("Soft-deleted question at {deleted_at}");
        Ok(())
    }
}
