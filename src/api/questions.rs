//! Question API endpoints.

use std::collections::BTreeMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult, JsonBody, PathParam, QueryParams};
use crate::errors::AppError;
use crate::models::{category_map, CreateQuestionRequest, Question};
use crate::AppState;

/// Query parameters of GET /questions.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// 1-based page number (default: 1).
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// Payload of GET /questions.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Number of questions on this page
    pub total_questions: usize,
    pub current_category: Option<i64>,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub created: i64,
}

/// GET /questions?page=N - List one page of questions with all categories.
pub async fn list_questions(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PageQuery>,
) -> ApiResult<QuestionPage> {
    if params.page == 0 {
        return Err(AppError::BadRequest("Pages start at 1".to_string()));
    }

    if state.repo.count_questions().await? == 0 {
        return Err(AppError::NotFound("No questions found".to_string()));
    }

    let questions = state
        .repo
        .list_questions_page(params.page, state.config.questions_per_page)
        .await?;
    let categories = state.repo.list_categories().await?;

    success(QuestionPage {
        total_questions: questions.len(),
        questions,
        current_category: None,
        categories: category_map(&categories),
    })
}

/// DELETE /questions/{id} - Delete a question.
pub async fn delete_question(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> ApiResult<DeletedResponse> {
    match state.repo.delete_question(id).await {
        Ok(true) => {
            tracing::info!("Deleted question {}", id);
            success(DeletedResponse { deleted: id })
        }
        Ok(false) => Err(AppError::Unprocessable(format!(
            "Question {} does not exist",
            id
        ))),
        Err(e) => Err(e),
    }
}

/// POST /questions - Create a new question.
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateQuestionRequest>,
) -> ApiResult<CreatedResponse> {
    // Validate required fields
    if request.question.trim().is_empty() {
        return Err(AppError::Unprocessable(
            "Question text is required".to_string(),
        ));
    }
    if request.answer.trim().is_empty() {
        return Err(AppError::Unprocessable("Answer is required".to_string()));
    }
    if request.difficulty < 1 {
        return Err(AppError::Unprocessable(
            "Difficulty must be a positive integer".to_string(),
        ));
    }

    let question = state.repo.create_question(&request).await?;
    tracing::info!(
        "Created question {} in category {}",
        question.id,
        question.category
    );

    success(CreatedResponse {
        created: question.id,
    })
}
