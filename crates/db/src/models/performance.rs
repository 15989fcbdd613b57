//! Performance review entity models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::performance::rating_label;
use staffhub_core::types::{DbId, Timestamp};
use validator::Validate;

/// A performance review row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerformanceReview {
    pub id: DbId,
    pub employee_id: DbId,
    pub rating: i32,
    pub review_date: NaiveDate,
    pub comments: String,
    pub reviewer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review row joined with the reviewed employee's name and code.
#[derive(Debug, Clone, FromRow)]
pub struct PerformanceReviewWithEmployee {
    pub id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub employee_code: String,
    pub rating: i32,
    pub review_date: NaiveDate,
    pub comments: String,
    pub reviewer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Serialized form of a review, including the display label for the rating.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReviewResponse {
    pub id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub employee_code: String,
    pub rating: i32,
    pub rating_display: &'static str,
    pub review_date: NaiveDate,
    pub comments: String,
    pub reviewer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PerformanceReviewWithEmployee> for PerformanceReviewResponse {
    fn from(row: PerformanceReviewWithEmployee) -> Self {
        // The CHECK constraint keeps stored ratings in range; fall back to
        // an empty label rather than panicking on a bad row.
        let rating_display = rating_label(row.rating).unwrap_or("");
        Self {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            employee_code: row.employee_code,
            rating: row.rating,
            rating_display,
            review_date: row.review_date,
            comments: row.comments,
            reviewer: row.reviewer,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating or replacing a performance review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePerformanceReview {
    pub employee_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub review_date: NaiveDate,
    #[serde(default)]
    pub comments: String,
    #[validate(length(min = 1, max = 100))]
    pub reviewer: String,
}

/// Per-rating review count, used by the analytics dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RatingCount {
    pub rating: i32,
    pub count: i64,
}
