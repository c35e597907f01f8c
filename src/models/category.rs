// src/models/category.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::{SqlitePool, prelude::FromRow};

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name, e.g. "Science".
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

impl Category {
    /// All categories, newest id first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, type FROM categories ORDER BY id DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// The `{id: type}` mapping clients render in the category sidebar.
/// Serialized keys are id strings in ascending order, whatever order `categories` came in.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.category_type.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_type_field() {
        let category = Category {
            id: 1,
            category_type: "Science".to_string(),
        };

        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn map_keys_by_id() {
        let categories = vec![
            Category {
                id: 2,
                category_type: "Art".to_string(),
            },
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
        ];

        let map = category_map(&categories);
        assert_eq!(map.len(), categories.len());
        assert_eq!(map[&2], "Art");

        // serde_json renders integer keys as strings
        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(value["1"], "Science");
    }
}
