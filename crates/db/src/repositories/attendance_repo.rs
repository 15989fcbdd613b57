//! Repository for the `attendance_records` table, including the aggregate
//! queries behind the statistics endpoints.

use chrono::NaiveDate;
use sqlx::PgPool;
use staffhub_core::types::DbId;

use crate::models::attendance::{
    Attendance, AttendanceWithEmployee, CreateAttendance, DailyCount, EmployeeStatusCounts,
    StatusCount, StatusCounts,
};

/// Column list for `attendance_records` SELECT queries.
const COLUMNS: &str = "\
    id, employee_id, date, status, check_in_time, check_out_time, notes, \
    created_at, updated_at";

/// Column list for reads joined with the employee.
const WITH_EMPLOYEE_COLUMNS: &str = "\
    a.id, a.employee_id, \
    e.first_name || ' ' || e.last_name AS employee_name, \
    e.employee_id AS employee_code, \
    a.date, a.status, a.check_in_time, a.check_out_time, a.notes, \
    a.created_at, a.updated_at";

/// Per-status count expressions shared by the aggregate queries.
const STATUS_COUNT_COLUMNS: &str = "\
    COUNT(a.id)::BIGINT AS total_days, \
    COUNT(a.id) FILTER (WHERE a.status = 'present')::BIGINT AS present_days, \
    COUNT(a.id) FILTER (WHERE a.status = 'absent')::BIGINT AS absent_days, \
    COUNT(a.id) FILTER (WHERE a.status = 'late')::BIGINT AS late_days, \
    COUNT(a.id) FILTER (WHERE a.status = 'half_day')::BIGINT AS half_days";

/// Provides query operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// List records, newest date first, optionally filtered by employee,
    /// status, and/or exact date.
    pub async fn list(
        pool: &PgPool,
        employee_id: Option<DbId>,
        status: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EMPLOYEE_COLUMNS} \
             FROM attendance_records a \
             JOIN employees e ON e.id = a.employee_id \
             WHERE ($1::BIGINT IS NULL OR a.employee_id = $1) \
               AND ($2::TEXT IS NULL OR a.status = $2) \
               AND ($3::DATE IS NULL OR a.date = $3) \
             ORDER BY a.date DESC, e.last_name"
        );
        sqlx::query_as::<_, AttendanceWithEmployee>(&query)
            .bind(employee_id)
            .bind(status)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// Get a single record joined with the employee.
    pub async fn get(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttendanceWithEmployee>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EMPLOYEE_COLUMNS} \
             FROM attendance_records a \
             JOIN employees e ON e.id = a.employee_id \
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, AttendanceWithEmployee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new record.
    pub async fn insert(
        pool: &PgPool,
        record: &CreateAttendance,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_records \
                (employee_id, date, status, check_in_time, check_out_time, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(record.employee_id)
            .bind(record.date)
            .bind(record.status.as_str())
            .bind(record.check_in_time)
            .bind(record.check_out_time)
            .bind(&record.notes)
            .fetch_one(pool)
            .await
    }

    /// Replace a record's fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        record: &CreateAttendance,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance_records \
             SET employee_id = $2, date = $3, status = $4, \
                 check_in_time = $5, check_out_time = $6, notes = $7, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .bind(record.employee_id)
            .bind(record.date)
            .bind(record.status.as_str())
            .bind(record.check_in_time)
            .bind(record.check_out_time)
            .bind(&record.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a record. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM attendance_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a record already exists for (employee, date). On update, the
    /// record being replaced is excluded from the check. This pre-check is
    /// advisory; the unique constraint is the backstop.
    pub async fn exists_for_employee_date(
        pool: &PgPool,
        employee_id: DbId,
        date: NaiveDate,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS( \
                SELECT 1 FROM attendance_records \
                WHERE employee_id = $1 AND date = $2 \
                  AND ($3::BIGINT IS NULL OR id <> $3))",
        )
        .bind(employee_id)
        .bind(date)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Aggregation queries
    // -----------------------------------------------------------------------

    /// Per-status counts for one employee over the inclusive range
    /// [from, to]. An employee with no records yields all-zero counts.
    pub async fn status_counts(
        pool: &PgPool,
        employee_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<StatusCounts, sqlx::Error> {
        let query = format!(
            "SELECT {STATUS_COUNT_COLUMNS} \
             FROM attendance_records a \
             WHERE a.employee_id = $1 AND a.date >= $2 AND a.date <= $3"
        );
        sqlx::query_as::<_, StatusCounts>(&query)
            .bind(employee_id)
            .bind(from)
            .bind(to)
            .fetch_one(pool)
            .await
    }

    /// Per-status counts for every active employee over the inclusive range
    /// [from, to]. Active employees with no records in range still appear,
    /// with all-zero counts.
    pub async fn fleet_status_counts(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<EmployeeStatusCounts>, sqlx::Error> {
        let query = format!(
            "SELECT \
                e.employee_id AS employee_code, \
                e.first_name || ' ' || e.last_name AS employee_name, \
                {STATUS_COUNT_COLUMNS} \
             FROM employees e \
             LEFT JOIN attendance_records a \
               ON a.employee_id = e.id AND a.date >= $1 AND a.date <= $2 \
             WHERE e.is_active \
             GROUP BY e.id \
             ORDER BY e.last_name, e.first_name"
        );
        sqlx::query_as::<_, EmployeeStatusCounts>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Total record count over the inclusive range [from, to], all
    /// employees.
    pub async fn count_in_range(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance_records WHERE date >= $1 AND date <= $2")
            .bind(from)
            .bind(to)
            .fetch_one(pool)
            .await
    }

    /// Record count per status value over the inclusive range [from, to].
    pub async fn status_distribution(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<StatusCount>, sqlx::Error> {
        let query = "\
            SELECT status, COUNT(*)::BIGINT AS count \
            FROM attendance_records \
            WHERE date >= $1 AND date <= $2 \
            GROUP BY status \
            ORDER BY status";
        sqlx::query_as::<_, StatusCount>(query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Present-record count per day over the inclusive range [from, to].
    pub async fn daily_present_counts(
        pool: &PgPool,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyCount>, sqlx::Error> {
        let query = "\
            SELECT date, COUNT(*)::BIGINT AS count \
            FROM attendance_records \
            WHERE date >= $1 AND date <= $2 AND status = 'present' \
            GROUP BY date \
            ORDER BY date";
        sqlx::query_as::<_, DailyCount>(query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
