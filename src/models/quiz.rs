//! Quiz request and scope resolution.

use serde::Deserialize;

use super::lenient;
use crate::errors::AppError;
use crate::quiz::QuizScope;

/// Category types meaning "All"; the frontend sends "click".
const ALL_CATEGORIES_TYPES: [&str; 2] = ["click", "all"];

/// The category selection part of a quiz request.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// Request body for fetching the next quiz question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(
        default = "default_previous_questions",
        deserialize_with = "lenient::int_list"
    )]
    pub quiz_previous_questions: Vec<i64>,
}

fn default_previous_questions() -> Vec<i64> {
    vec![0]
}

impl QuizCategory {
    /// Resolve the selection to a quiz scope.
    pub fn scope(&self) -> Result<QuizScope, AppError> {
        let kind = self.kind.trim();
        if ALL_CATEGORIES_TYPES
            .iter()
            .any(|all| kind.eq_ignore_ascii_case(all))
        {
            return Ok(QuizScope::All);
        }

        self.id
            .as_ref()
            .and_then(lenient::resolve_int)
            .map(QuizScope::Category)
            .ok_or_else(|| {
                AppError::Unprocessable(format!("Invalid quiz category {:?}", self.kind))
            })
    }
}
