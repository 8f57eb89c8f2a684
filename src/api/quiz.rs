//! Quiz API endpoints.

use std::collections::HashSet;

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult, JsonBody};
use crate::models::{Question, QuizRequest};
use crate::quiz;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

/// POST /quiz - Draw the next question the player has not seen yet.
pub async fn play_quiz(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> ApiResult<QuizResponse> {
    let scope = request.quiz_category.scope()?;
    let excluded: HashSet<i64> = request.quiz_previous_questions.iter().copied().collect();

    let candidates = state.repo.list_questions_in_scope(scope).await?;

    let question = quiz::next_question(candidates, scope, &excluded, &mut rand::thread_rng())
        .inspect_err(|_| {
            tracing::debug!(
                "Quiz exhausted for {:?} after {} questions",
                scope,
                excluded.len()
            )
        })?;

    success(QuizResponse { question })
}
