// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        category::Category,
        question::Question,
        quiz::{ALL_CATEGORIES, QuizRequest, select_unseen},
    },
    utils::extract::AppJson,
};

/// Returns a random question the player has not seen yet.
///
/// * `quiz_category.id == 0` draws from every category.
/// * When every question in the pool was already asked, `question` is `false`.
pub async fn next_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let round = payload.into_round()?;

    let candidates = if round.category == ALL_CATEGORIES {
        Question::list(&pool).await?
    } else {
        let category = Category::find(&pool, round.category)
            .await?
            .ok_or(AppError::NotFound)?;
        Question::list_by_category(&pool, category.id).await?
    };

    let picked = select_unseen(&candidates, &round.previous_questions, &mut rand::thread_rng());

    tracing::debug!(
        category = round.category,
        pool_size = candidates.len(),
        asked = round.previous_questions.len(),
        picked = picked.map(|q| q.id),
        "Quiz question selected"
    );

    let question = match picked {
        Some(question) => serde_json::to_value(question).map_err(|e| {
            tracing::error!("Failed to serialize question: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?,
        None => serde_json::Value::Bool(false),
    };

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
        "previous_questions": round.previous_questions,
    })))
}
