//! Question use cases
//!
//! Orchestrates validation, existence checks and answer checking on top of a
//! [`QuestionRepository`]. Errors are returned unchanged, never retried.

use crate::{
    core::{answer, question::Question, validation::QuestionValidator},
    error::{QuizError, Result},
    store::QuestionRepository,
};
use tracing::{debug, info, instrument};

/// Entry point for every quiz operation
pub struct QuestionService<R> {
    repository: R,
    validator: QuestionValidator,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Create a new service over the given repository
    pub fn new(repository: R) -> Result<Self> {
        Ok(Self {
            repository,
            validator: QuestionValidator::new()?,
        })
    }

    /// Validate and persist a new question
    #[instrument(skip(self, question, answer))]
    pub fn store(&self, number: &str, question: &str, answer: &str) -> Result<()> {
        let candidate = Question::new(number, question, answer);
        self.validator.validate(&candidate)?;

        if self.repository.fetch_by_number(number)?.is_some() {
            return Err(QuizError::duplicate(number));
        }

        self.repository.insert(&candidate)?;
        info!("Question created");
        Ok(())
    }

    /// All live questions by ascending number
    #[instrument(skip(self))]
    pub fn get_all(&self) -> Result<Vec<Question>> {
        self.repository.list()
    }

    /// The question with this number
    #[instrument(skip(self))]
    pub fn get_by_number(&self, number: &str) -> Result<Question> {
        self.repository
            .fetch_by_number(number)?
            .ok_or_else(|| QuizError::not_found(number))
    }

    /// Check a submitted answer against the stored one
    #[instrument(skip(self, submitted))]
    pub fn answer_question(&self, number: &str, submitted: &str) -> Result<()> {
        let question = self.get_by_number(number)?;
        answer::check_answer(&question.answer, submitted)?;
        debug!("Answer accepted");
        Ok(())
    }

    /// Delete an existing question
    #[instrument(skip(self))]
    pub fn destroy(&self, number: &str) -> Result<()> {
        self.get_by_number(number)?;
        self.repository.delete_by_number(number)?;
        info!("Question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockQuestionRepository;

    fn stored(number: &str, answer: &str) -> Question {
        Question::new(number, "lorem ipsum dolor?", answer).with_id(1)
    }

    fn service(repo: MockQuestionRepository) -> QuestionService<MockQuestionRepository> {
        QuestionService::new(repo).unwrap()
    }

    #[test]
    fn test_store_success() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .withf(|n| n == "1")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|q| q.number == "1" && q.question == "lorem ipsum" && q.answer == "1")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).store("1", "lorem ipsum", "1").is_ok());
    }

    #[test]
    fn test_store_invalid_number_does_not_touch_storage() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().never();
        repo.expect_insert().never();

        let err = service(repo).store("abc", "lorem ipsum", "1").unwrap_err();
        assert_eq!(err.to_string(), "Number must be a valid numeric value");
    }

    #[test]
    fn test_store_invalid_answer_does_not_touch_storage() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().never();
        repo.expect_insert().never();

        let err = service(repo).store("100", "lorem ipsum", "ac").unwrap_err();
        assert!(matches!(err, QuizError::Validation { .. }));
    }

    #[test]
    fn test_store_duplicate() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|n| Ok(Some(stored(n, "1"))));
        repo.expect_insert().never();

        let err = service(repo).store("1", "lorem ipsum", "1").unwrap_err();
        assert_eq!(err.to_string(), "Question no 1 already existed!");
    }

    #[test]
    fn test_store_propagates_insert_failure() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|_| Err(QuizError::storage("expected to affect 1 row, affected 0")));

        let err = service(repo).store("1", "lorem ipsum", "1").unwrap_err();
        assert!(matches!(err, QuizError::Storage { .. }));
    }

    #[test]
    fn test_get_all() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![stored("1", "2"), stored("2", "3")]));

        let questions = service(repo).get_all().unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_get_by_number_not_found() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().returning(|_| Ok(None));

        let err = service(repo).get_by_number("9").unwrap_err();
        assert!(matches!(err, QuizError::NotFound { ref number } if number == "9"));
    }

    #[test]
    fn test_answer_question_accepts_digits_and_words() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .times(3)
            .returning(|n| Ok(Some(stored(n, "2"))));
        let svc = service(repo);

        assert!(svc.answer_question("1", "2").is_ok());
        assert!(svc.answer_question("1", "two").is_ok());
        assert!(svc.answer_question("1", "Two").is_ok());
    }

    #[test]
    fn test_answer_question_wrong() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|n| Ok(Some(stored(n, "2"))));

        let err = service(repo).answer_question("1", "3").unwrap_err();
        assert_eq!(err.to_string(), "Wrong Answer!");
    }

    #[test]
    fn test_answer_question_missing() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().returning(|_| Ok(None));

        let err = service(repo).answer_question("1", "2").unwrap_err();
        assert!(matches!(err, QuizError::NotFound { .. }));
    }

    #[test]
    fn test_destroy_success() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|n| Ok(Some(stored(n, "2"))));
        repo.expect_delete_by_number()
            .withf(|n| n == "1")
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).destroy("1").is_ok());
    }

    #[test]
    fn test_destroy_missing_never_deletes() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number().returning(|_| Ok(None));
        repo.expect_delete_by_number().never();

        let err = service(repo).destroy("1").unwrap_err();
        assert!(matches!(err, QuizError::NotFound { .. }));
    }

    #[test]
    fn test_destroy_propagates_row_count_failure() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|n| Ok(Some(stored(n, "2"))));
        repo.expect_delete_by_number()
            .returning(|_| Err(QuizError::storage("expected to affect 1 row, affected 0")));

        let err = service(repo).destroy("1").unwrap_err();
        assert!(matches!(err, QuizError::Storage { .. }));
    }

    #[test]
    fn test_store_propagates_lookup_failure() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .times(1)
            .returning(|_| Err(QuizError::storage("disk I/O error")));
        repo.expect_insert().never();

        let err = service(repo).store("1", "lorem ipsum", "1").unwrap_err();
        assert!(matches!(err, QuizError::Storage { .. }));
    }

    #[test]
    fn test_answer_question_propagates_lookup_failure() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|_| Err(QuizError::storage("disk I/O error")));

        let err = service(repo).answer_question("1", "2").unwrap_err();
        assert!(matches!(err, QuizError::Storage { .. }));
    }

    #[test]
    fn test_destroy_propagates_lookup_failure() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_by_number()
            .returning(|_| Err(QuizError::storage("disk I/O error")));
        repo.expect_delete_by_number().never();

        let err = service(repo).destroy("1").unwrap_err();
        assert!(matches!(err, QuizError::Storage { .. }));
    }
}
