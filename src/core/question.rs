//! Question entity

/// A numbered quiz question and its numeric answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Storage id, `None` until the question has been persisted
    pub id: Option<i64>,
    /// User-facing identifier, a string of digits
    pub number: String,
    /// Prompt shown to the user
    pub question: String,
    /// Expected answer, a non-negative integer rendered as digits
    pub answer: String,
}

impl Question {
    /// Build a candidate question that has not been stored yet
    pub fn new(
        number: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            number: number.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Attach the id assigned by storage
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
