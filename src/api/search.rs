//! Search API endpoints.

use axum::extract::State;

use super::{success, ApiResult, JsonBody, QuestionList};
use crate::models::SearchQuestionsRequest;
use crate::AppState;

/// POST /search_questions - Find questions whose text contains the term.
pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SearchQuestionsRequest>,
) -> ApiResult<QuestionList> {
    let questions = state.repo.search_questions(&request.search_term).await?;
    tracing::debug!(
        "Search {:?} matched {} questions",
        request.search_term,
        questions.len()
    );

    success(QuestionList::new(questions))
}
