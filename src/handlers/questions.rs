// src/handlers/questions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{Category, category_map},
        question::{Question, QuestionPayload},
    },
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        pagination::{PageParams, paginate},
    },
};

/// Lists questions ten per page, newest first.
///
/// * `?page=N` selects the page (default 1); pages past the end are empty.
/// * `?category=C` restricts the listing to one category and echoes it as
///   `current_category`. Without it `current_category` is `null`.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let current_category = match params.category {
        Some(id) => Some(
            Category::find(&pool, id)
                .await?
                .ok_or(AppError::NotFound)?,
        ),
        None => None,
    };

    let questions = match &current_category {
        Some(category) => Question::list_by_category(&pool, category.id).await?,
        None => Question::list(&pool).await?,
    };
    let categories = Category::list(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": paginate(&questions, params.page()),
        "total_questions": questions.len(),
        "categories": category_map(&categories),
        "current_category": current_category,
    })))
}

/// Retrieves a single question by ID.
pub async fn get_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = Question::find(&pool, id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
    })))
}

/// Creates a new question.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.into_new_question()?;

    let id = Question::insert(&pool, &new_question).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!(question_id = id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "created": id,
        })),
    ))
}

/// Replaces all fields of a question.
/// The body is validated before the row is looked up.
pub async fn update_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.into_new_question()?;

    let updated = Question::replace(&pool, id, &new_question)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update question: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    if !updated {
        return Err(AppError::NotFound);
    }

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(serde_json::json!({
        "success": true,
        "updated": id,
    })))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = Question::delete(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to delete question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": id,
        "message": format!("deleted {}", id),
    })))
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    #[validate(required(message = "searchTerm is required"))]
    pub search_term: Option<String>,
}

/// Case-insensitive substring search over question text. Not paginated.
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    let search_term = payload.search_term.unwrap_or_default();

    let questions = Question::search(&pool, &search_term).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": questions,
        "total_questions": questions.len(),
    })))
}
