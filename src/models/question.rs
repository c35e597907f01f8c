// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
/// Serializes to the public question shape.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Category id. Treated as an opaque integer, not a checked foreign key.
    pub category: i64,

    pub difficulty: i64,
}

const SELECT_QUESTIONS: &str = "SELECT id, question, answer, category, difficulty FROM questions";

impl Question {
    /// All questions, newest id first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!("{SELECT_QUESTIONS} ORDER BY id DESC"))
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_category(
        pool: &SqlitePool,
        category: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!(
            "{SELECT_QUESTIONS} WHERE category = $1 ORDER BY id DESC"
        ))
        .bind(category)
        .fetch_all(pool)
        .await
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(&format!("{SELECT_QUESTIONS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring match on the question text, newest first.
    ///
    /// SQLite's `LIKE` and `LOWER` fold ASCII only, so case folding is done here.
    pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Self>, sqlx::Error> {
        let needle = term.to_lowercase();
        let questions = Self::list(pool).await?;

        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Inserts a row and returns its assigned id.
    pub async fn insert(pool: &SqlitePool, new: &NewQuestion) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(pool)
        .await
    }

    /// Overwrites every mutable column. Returns `false` if no row has `id`.
    pub async fn replace(
        pool: &SqlitePool,
        id: i64,
        new: &NewQuestion,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET question = $1, answer = $2, category = $3, difficulty = $4
            WHERE id = $5
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` if no row has `id`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// An integer that clients may also send as a numeric string (form values such as `"3"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IntOrString::Int(n) => Some(*n),
            IntOrString::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Body of `POST /questions` and `PUT /questions/{id}`.
/// Every field is optional at the serde level so absence is reported as a 400, not a parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionPayload {
    #[validate(
        required(message = "question is required"),
        length(min = 1, message = "question must not be empty")
    )]
    pub question: Option<String>,
    #[validate(
        required(message = "answer is required"),
        length(min = 1, message = "answer must not be empty")
    )]
    pub answer: Option<String>,
    #[validate(required(message = "difficulty is required"))]
    pub difficulty: Option<IntOrString>,
    #[validate(required(message = "category is required"))]
    pub category: Option<IntOrString>,
}

/// A validated question ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl QuestionPayload {
    /// Missing or blank text is a 400; non-numeric numbers are a 422.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        if let Err(validation_errors) = self.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        let (Some(question), Some(answer), Some(difficulty), Some(category)) =
            (self.question, self.answer, self.difficulty, self.category)
        else {
            return Err(AppError::BadRequest("missing required field".to_string()));
        };

        if question.trim().is_empty() {
            return Err(AppError::BadRequest("question must not be blank".to_string()));
        }
        if answer.trim().is_empty() {
            return Err(AppError::BadRequest("answer must not be blank".to_string()));
        }

        let difficulty = difficulty
            .as_i64()
            .ok_or_else(|| AppError::Unprocessable("difficulty must be an integer".to_string()))?;

        let category = category
            .as_i64()
            .ok_or_else(|| AppError::Unprocessable("category must be an integer".to_string()))?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> QuestionPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let new = payload(json!({
            "question": "new Question ?",
            "answer": "yes",
            "difficulty": "3",
            "category": 4
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new.difficulty, 3);
        assert_eq!(new.category, 4);
    }

    #[test]
    fn missing_answer_is_bad_request() {
        let err = payload(json!({"question": "Q", "difficulty": 1, "category": 1}))
            .into_new_question()
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_answer_is_bad_request() {
        let err = payload(json!({"question": "Q", "answer": "", "difficulty": 1, "category": 1}))
            .into_new_question()
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_question_is_bad_request() {
        let err = payload(json!({"question": "   ", "answer": "A", "difficulty": 1, "category": 1}))
            .into_new_question()
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_numeric_difficulty_is_unprocessable() {
        let err = payload(json!({"question": "Q", "answer": "A", "difficulty": "hard", "category": 1}))
            .into_new_question()
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn any_integer_difficulty_is_accepted() {
        let new = payload(json!({"question": "Q", "answer": "A", "difficulty": 6, "category": 1}))
            .into_new_question()
            .unwrap();

        assert_eq!(new.difficulty, 6);
    }
}
