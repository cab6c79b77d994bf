//! Question/answer pairs recorded in a session

use serde::{Deserialize, Serialize};

/// One question paired with the answer it produced
///
/// Fields are private so a recorded exchange cannot be edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    question: String,
    answer: String,
    /// True when `answer` is a folded generation error
    failed: bool,
    asked_at: chrono::DateTime<chrono::Utc>,
}

impl Exchange {
    /// A successfully answered question
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            failed: false,
            asked_at: chrono::Utc::now(),
        }
    }

    /// A question whose answer is an error message
    pub fn failed(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            failed: true,
            ..Self::new(question, answer)
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }
}
