//! Category API endpoints.

use std::collections::BTreeMap;

use axum::extract::State;
use serde::Serialize;

use super::{success, ApiResult, PathParam};
use crate::errors::AppError;
use crate::models::{category_map, Question};
use crate::AppState;

/// Payload of GET /categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
}

/// A list of questions outside of paging.
#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

impl QuestionList {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category: None,
        }
    }
}

/// GET /categories - List all categories as an id -> type map.
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state.repo.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories found".to_string()));
    }

    success(CategoriesResponse {
        categories: category_map(&categories),
    })
}

/// GET /categories/{id}/questions - List the questions of one category.
///
/// An unknown category yields an empty list, not a 404.
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i64>,
) -> ApiResult<QuestionList> {
    let questions = state
        .repo
        .list_questions_by_category(category_id)
        .await
        .map_err(AppError::into_not_found)?;

    success(QuestionList::new(questions))
}
