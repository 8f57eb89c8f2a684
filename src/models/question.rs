//! Question model and request bodies.

use serde::{Deserialize, Serialize};

use super::lenient;

/// A trivia question in its wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Request body for creating a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient::int")]
    pub difficulty: i64,
    /// Category id
    #[serde(deserialize_with = "lenient::int")]
    pub category: i64,
}

/// Request body for searching questions by text.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestionsRequest {
    pub search_term: String,
}
