//! Repository for the `employees` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use staffhub_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, EmployeeDetail, EmployeeListRow};

/// Column list for `employees` SELECT queries.
const COLUMNS: &str = "\
    id, employee_id, first_name, last_name, email, phone_number, address, \
    department_id, date_joined, position, salary, is_active, \
    created_at, updated_at";

/// Column list for summary rows (joined with the department name).
const LIST_COLUMNS: &str = "\
    e.id, e.employee_id, e.first_name || ' ' || e.last_name AS full_name, \
    e.first_name, e.last_name, e.email, d.name AS department_name, \
    e.position, e.is_active, e.date_joined";

/// Result cap for the free-text search endpoint.
const SEARCH_LIMIT: i64 = 50;

/// Provides query operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List summary rows ordered by last then first name.
    ///
    /// Each filter applies only when provided; `search` matches first name,
    /// last name, email, or employee code.
    pub async fn list(
        pool: &PgPool,
        department_id: Option<DbId>,
        is_active: Option<bool>,
        position: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<EmployeeListRow>, sqlx::Error> {
        let pattern = search.map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {LIST_COLUMNS} \
             FROM employees e \
             JOIN departments d ON d.id = e.department_id \
             WHERE ($1::BIGINT IS NULL OR e.department_id = $1) \
               AND ($2::BOOLEAN IS NULL OR e.is_active = $2) \
               AND ($3::TEXT IS NULL OR e.position = $3) \
               AND ($4::TEXT IS NULL \
                    OR e.first_name ILIKE $4 OR e.last_name ILIKE $4 \
                    OR e.email ILIKE $4 OR e.employee_id ILIKE $4) \
             ORDER BY e.last_name, e.first_name"
        );
        sqlx::query_as::<_, EmployeeListRow>(&query)
            .bind(department_id)
            .bind(is_active)
            .bind(position)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Free-text search capped at 50 rows.
    pub async fn search(
        pool: &PgPool,
        search: Option<&str>,
        department_id: Option<DbId>,
        is_active: Option<bool>,
    ) -> Result<Vec<EmployeeListRow>, sqlx::Error> {
        let pattern = search.map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {LIST_COLUMNS} \
             FROM employees e \
             JOIN departments d ON d.id = e.department_id \
             WHERE ($1::TEXT IS NULL \
                    OR e.first_name ILIKE $1 OR e.last_name ILIKE $1 \
                    OR e.email ILIKE $1 OR e.employee_id ILIKE $1) \
               AND ($2::BIGINT IS NULL OR e.department_id = $2) \
               AND ($3::BOOLEAN IS NULL OR e.is_active = $3) \
             ORDER BY e.last_name, e.first_name \
             LIMIT $4"
        );
        sqlx::query_as::<_, EmployeeListRow>(&query)
            .bind(pattern)
            .bind(department_id)
            .bind(is_active)
            .bind(SEARCH_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Get a raw employee row.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get the detail view: full row plus department name and per-employee
    /// review/attendance counts.
    pub async fn get_detail(pool: &PgPool, id: DbId) -> Result<Option<EmployeeDetail>, sqlx::Error> {
        let query = "\
            SELECT \
                e.id, e.employee_id, e.first_name, e.last_name, \
                e.first_name || ' ' || e.last_name AS full_name, \
                e.email, e.phone_number, e.address, \
                e.department_id, d.name AS department_name, \
                e.date_joined, e.position, e.salary, e.is_active, \
                (SELECT COUNT(*) FROM performance_reviews p \
                  WHERE p.employee_id = e.id) AS performance_count, \
                (SELECT COUNT(*) FROM attendance_records a \
                  WHERE a.employee_id = e.id) AS attendance_count, \
                e.created_at, e.updated_at \
            FROM employees e \
            JOIN departments d ON d.id = e.department_id \
            WHERE e.id = $1";
        sqlx::query_as::<_, EmployeeDetail>(query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new employee.
    pub async fn insert(pool: &PgPool, employee: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees \
                (employee_id, first_name, last_name, email, phone_number, \
                 address, department_id, date_joined, position, salary, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&employee.employee_id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(&employee.phone_number)
            .bind(&employee.address)
            .bind(employee.department_id)
            .bind(employee.date_joined)
            .bind(&employee.position)
            .bind(employee.salary)
            .bind(employee.is_active)
            .fetch_one(pool)
            .await
    }

    /// Replace an employee's fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        employee: &CreateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees \
             SET employee_id = $2, first_name = $3, last_name = $4, email = $5, \
                 phone_number = $6, address = $7, department_id = $8, \
                 date_joined = $9, position = $10, salary = $11, is_active = $12, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&employee.employee_id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(&employee.phone_number)
            .bind(&employee.address)
            .bind(employee.department_id)
            .bind(employee.date_joined)
            .bind(&employee.position)
            .bind(employee.salary)
            .bind(employee.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee (cascades to reviews and attendance). Returns
    /// whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether another employee already uses this external code. On update,
    /// the record being replaced is excluded from the check.
    pub async fn exists_by_employee_code(
        pool: &PgPool,
        employee_code: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM employees \
                WHERE employee_id = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(employee_code)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Number of active employees.
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE is_active")
            .fetch_one(pool)
            .await
    }

    /// Number of active employees who joined on or after `since`.
    pub async fn count_joined_since(pool: &PgPool, since: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE is_active AND date_joined >= $1")
            .bind(since)
            .fetch_one(pool)
            .await
    }
}
