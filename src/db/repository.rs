//! Database repository for question and category queries.
//!
//! Uses prepared statements throughout. Categories are read-only.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Category, CreateQuestionRequest, Question};
use crate::quiz::QuizScope;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CATEGORY OPERATIONS ====================

    /// List all categories ordered by id.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| category_from_row(&row)).collect())
    }

    // ==================== QUESTION OPERATIONS ====================

    /// Count every stored question.
    pub async fn count_questions(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("total"))
    }

    /// List all questions ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM questions ORDER BY id",
            QUESTION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| question_from_row(&row)).collect())
    }

    /// List one page of questions ordered by id. Pages start at 1.
    pub async fn list_questions_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Question>, AppError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);

        let rows = sqlx::query(&format!(
            "SELECT {} FROM questions ORDER BY id LIMIT ? OFFSET ?",
            QUESTION_COLUMNS
        ))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| question_from_row(&row)).collect())
    }

    /// List the questions of one category ordered by id.
    pub async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| question_from_row(&row)).collect())
    }

    /// List the questions a quiz in `scope` may draw from.
    pub async fn list_questions_in_scope(
        &self,
        scope: QuizScope,
    ) -> Result<Vec<Question>, AppError> {
        match scope {
            QuizScope::All => self.list_questions().await,
            QuizScope::Category(id) => self.list_questions_by_category(id).await,
        }
    }

    /// Case-insensitive substring search on the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query(&format!(
            r"SELECT {} FROM questions WHERE question LIKE ? ESCAPE '\' ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| question_from_row(&row)).collect())
    }

    /// Create a new question.
    pub async fn create_question(
        &self,
        request: &CreateQuestionRequest,
    ) -> Result<Question, AppError> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.question)
        .bind(&request.answer)
        .bind(request.category)
        .bind(request.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: request.question.clone(),
            answer: request.answer.clone(),
            category: request.category,
            difficulty: request.difficulty,
        })
    }

    /// Delete a question. Returns `false` when no question has that id.
    pub async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper functions for row conversion

fn category_from_row(row: &sqlx::sqlite::SqliteRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

fn question_from_row(row: &sqlx::sqlite::SqliteRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
