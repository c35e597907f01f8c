// src/models/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{IntOrString, Question},
};

/// Category id meaning "draw from every category".
pub const ALL_CATEGORIES: i64 = 0;

/// The category selector sent by the client, e.g. `{"type": "Science", "id": "1"}`.
/// Only `id` is used.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: Option<IntOrString>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(required(message = "previous_questions is required"))]
    pub previous_questions: Option<Vec<i64>>,
    #[validate(required(message = "quiz_category is required"))]
    pub quiz_category: Option<QuizCategory>,
}

/// A validated quiz round: what was already asked and where to draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRound {
    pub previous_questions: Vec<i64>,
    pub category: i64,
}

impl QuizRequest {
    pub fn into_round(self) -> Result<QuizRound, AppError> {
        if let Err(validation_errors) = self.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        let (Some(previous_questions), Some(quiz_category)) =
            (self.previous_questions, self.quiz_category)
        else {
            return Err(AppError::BadRequest("missing required field".to_string()));
        };

        let category = quiz_category
            .id
            .ok_or_else(|| AppError::BadRequest("quiz_category.id is required".to_string()))?
            .as_i64()
            .ok_or_else(|| {
                AppError::Unprocessable("quiz_category.id must be an integer".to_string())
            })?;

        Ok(QuizRound {
            previous_questions,
            category,
        })
    }
}

/// Picks a question from `pool` whose id is not in `asked`, uniformly at random.
///
/// The eligible set is computed up front, so selection always terminates and
/// returns `None` exactly when every question in the pool has been asked.
/// Duplicate or foreign ids in `asked` have no effect.
pub fn select_unseen<'a, R>(pool: &'a [Question], asked: &[i64], rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let asked: HashSet<i64> = asked.iter().copied().collect();
    let eligible: Vec<&Question> = pool.iter().filter(|q| !asked.contains(&q.id)).collect();

    eligible.choose(rng).copied()
}
