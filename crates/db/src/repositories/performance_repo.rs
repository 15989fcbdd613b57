//! Repository for the `performance_reviews` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use staffhub_core::types::DbId;

use crate::models::performance::{
    CreatePerformanceReview, PerformanceReview, PerformanceReviewWithEmployee, RatingCount,
};

/// Column list for `performance_reviews` SELECT queries.
const COLUMNS: &str =
    "id, employee_id, rating, review_date, comments, reviewer, created_at, updated_at";

/// Column list for reads joined with the reviewed employee.
const WITH_EMPLOYEE_COLUMNS: &str = "\
    p.id, p.employee_id, \
    e.first_name || ' ' || e.last_name AS employee_name, \
    e.employee_id AS employee_code, \
    p.rating, p.review_date, p.comments, p.reviewer, \
    p.created_at, p.updated_at";

/// Provides query operations for performance reviews.
pub struct PerformanceRepo;

impl PerformanceRepo {
    /// List reviews, newest first, optionally filtered by employee and/or
    /// rating.
    pub async fn list(
        pool: &PgPool,
        employee_id: Option<DbId>,
        rating: Option<i32>,
    ) -> Result<Vec<PerformanceReviewWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EMPLOYEE_COLUMNS} \
             FROM performance_reviews p \
             JOIN employees e ON e.id = p.employee_id \
             WHERE ($1::BIGINT IS NULL OR p.employee_id = $1) \
               AND ($2::INT IS NULL OR p.rating = $2) \
             ORDER BY p.review_date DESC"
        );
        sqlx::query_as::<_, PerformanceReviewWithEmployee>(&query)
            .bind(employee_id)
            .bind(rating)
            .fetch_all(pool)
            .await
    }

    /// Get a single review joined with the employee.
    pub async fn get(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PerformanceReviewWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EMPLOYEE_COLUMNS} \
             FROM performance_reviews p \
             JOIN employees e ON e.id = p.employee_id \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PerformanceReviewWithEmployee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new review.
    pub async fn insert(
        pool: &PgPool,
        review: &CreatePerformanceReview,
    ) -> Result<PerformanceReview, sqlx::Error> {
        let query = format!(
            "INSERT INTO performance_reviews \
                (employee_id, rating, review_date, comments, reviewer) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerformanceReview>(&query)
            .bind(review.employee_id)
            .bind(review.rating)
            .bind(review.review_date)
            .bind(&review.comments)
            .bind(&review.reviewer)
            .fetch_one(pool)
            .await
    }

    /// Replace a review's fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        review: &CreatePerformanceReview,
    ) -> Result<Option<PerformanceReview>, sqlx::Error> {
        let query = format!(
            "UPDATE performance_reviews \
             SET employee_id = $2, rating = $3, review_date = $4, \
                 comments = $5, reviewer = $6, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PerformanceReview>(&query)
            .bind(id)
            .bind(review.employee_id)
            .bind(review.rating)
            .bind(review.review_date)
            .bind(&review.comments)
            .bind(&review.reviewer)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM performance_reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a review already exists for (employee, review_date). On
    /// update, the record being replaced is excluded from the check. This
    /// pre-check is advisory; the unique constraint is the backstop.
    pub async fn exists_for_employee_date(
        pool: &PgPool,
        employee_id: DbId,
        review_date: NaiveDate,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM performance_reviews \
                WHERE employee_id = $1 AND review_date = $2 \
                  AND ($3::BIGINT IS NULL OR id <> $3))",
        )
        .bind(employee_id)
        .bind(review_date)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Review count per rating value, ascending.
    pub async fn rating_distribution(pool: &PgPool) -> Result<Vec<RatingCount>, sqlx::Error> {
        let query = "\
            SELECT rating, COUNT(*)::BIGINT AS count \
            FROM performance_reviews \
            GROUP BY rating \
            ORDER BY rating";
        sqlx::query_as::<_, RatingCount>(query).fetch_all(pool).await
    }
}
