// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        category::{Category, category_map},
        question::Question,
    },
    utils::extract::AppPath,
};

/// Lists every category as an `{id: type}` mapping.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = Category::list(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": category_map(&categories),
        "total_categories": categories.len(),
    })))
}

/// Lists all questions of one category, newest first.
pub async fn list_category_questions(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let category = Category::find(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = Question::list_by_category(&pool, category.id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": questions,
        "total_questions": questions.len(),
        "current_category": category,
    })))
}
