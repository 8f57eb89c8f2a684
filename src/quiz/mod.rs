//! Quiz question selection.
//!
//! The selector keeps no session state. Each call receives the candidate
//! questions, the scope and the ids the player has already seen, and draws
//! one remaining question uniformly at random.

use std::collections::HashSet;

use rand::Rng;

use crate::errors::AppError;
use crate::models::Question;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn includes(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}

/// No question in scope is left to ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl From<Exhausted> for AppError {
    fn from(_: Exhausted) -> Self {
        AppError::QuizExhausted
    }
}

/// Pick the next quiz question.
///
/// Eligible questions are the `candidates` inside `scope` whose id is not in
/// `excluded`. Every eligible question is equally likely to be returned.
pub fn next_question<R>(
    candidates: Vec<Question>,
    scope: QuizScope,
    excluded: &HashSet<i64>,
    rng: &mut R,
) -> Result<Question, Exhausted>
where
    R: Rng + ?Sized,
{
    let mut eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| scope.includes(q) && !excluded.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return Err(Exhausted);
    }

    let index = rng.gen_range(0..eligible.len());
    Ok(eligible.swap_remove(index))
}
