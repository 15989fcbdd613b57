//! Repository for the `departments` table.

use sqlx::PgPool;
use staffhub_core::types::DbId;

use crate::models::department::{
    CreateDepartment, Department, DepartmentHeadcount, DepartmentWithCount,
};

/// Column list for `departments` SELECT queries.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Column list for reads that include the active-employee headcount.
const WITH_COUNT_COLUMNS: &str = "\
    d.id, d.name, d.description, \
    (SELECT COUNT(*) FROM employees e \
      WHERE e.department_id = d.id AND e.is_active) AS employee_count, \
    d.created_at, d.updated_at";

/// Provides query operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List departments ordered by name, optionally filtered by a free-text
    /// match on name or description.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<DepartmentWithCount>, sqlx::Error> {
        let pattern = search.map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {WITH_COUNT_COLUMNS} FROM departments d \
             WHERE $1::TEXT IS NULL OR d.name ILIKE $1 OR d.description ILIKE $1 \
             ORDER BY d.name"
        );
        sqlx::query_as::<_, DepartmentWithCount>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Get a single department with its headcount.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<DepartmentWithCount>, sqlx::Error> {
        let query = format!("SELECT {WITH_COUNT_COLUMNS} FROM departments d WHERE d.id = $1");
        sqlx::query_as::<_, DepartmentWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new department.
    pub async fn insert(
        pool: &PgPool,
        department: &CreateDepartment,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&department.name)
            .bind(&department.description)
            .fetch_one(pool)
            .await
    }

    /// Replace a department's fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        department: &CreateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments \
             SET name = $2, description = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&department.name)
            .bind(&department.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a department (cascades to its employees). Returns whether a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of departments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(pool)
            .await
    }

    /// Employee headcount per department, ordered by name.
    pub async fn headcounts(pool: &PgPool) -> Result<Vec<DepartmentHeadcount>, sqlx::Error> {
        let query = "\
            SELECT d.name, COUNT(e.id)::BIGINT AS employee_count \
            FROM departments d \
            LEFT JOIN employees e ON e.department_id = d.id \
            GROUP BY d.id \
            ORDER BY d.name";
        sqlx::query_as::<_, DepartmentHeadcount>(query)
            .fetch_all(pool)
            .await
    }
}
