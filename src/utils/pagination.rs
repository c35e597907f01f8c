// src/utils/pagination.rs

use serde::Deserialize;

/// Fixed page size for question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page number. Missing or unparseable values mean page 1.
    pub page: Option<String>,
    /// Restricts the listing to one category and reports it as the current category.
    pub category: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Returns `items[(page-1)*10 .. (page-1)*10+10]`, clamped to the input.
/// Pages before the first or past the last yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };

    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
