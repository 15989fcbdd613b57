//! Attendance entity models, DTOs, and aggregate views.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::attendance::AttendanceStatus;
use staffhub_core::timesheet::hours_worked;
use staffhub_core::types::{DbId, Timestamp};

/// An attendance row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub employee_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Attendance row joined with the employee's name and code.
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceWithEmployee {
    pub id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub employee_code: String,
    pub date: NaiveDate,
    pub status: String,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Serialized form of an attendance record: adds the status display label
/// and the derived worked-hours value (absent when either time is missing).
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub employee_code: String,
    pub date: NaiveDate,
    pub status: String,
    pub status_display: String,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub hours_worked: Option<f64>,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AttendanceWithEmployee> for AttendanceResponse {
    fn from(row: AttendanceWithEmployee) -> Self {
        let status_display = AttendanceStatus::parse(&row.status)
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| row.status.clone());
        let hours = hours_worked(row.date, row.check_in_time, row.check_out_time);
        Self {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            employee_code: row.employee_code,
            date: row.date,
            status: row.status,
            status_display,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            hours_worked: hours,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating or replacing an attendance record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendance {
    pub employee_id: DbId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Aggregate views (returned by aggregation queries)
// ---------------------------------------------------------------------------

/// Per-status record counts for a single employee over a date range.
#[derive(Debug, Clone, FromRow)]
pub struct StatusCounts {
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub half_days: i64,
}

/// Per-status counts per employee, for the fleet-wide summary. Employees
/// with no records in range appear with all-zero counts.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeStatusCounts {
    pub employee_code: String,
    pub employee_name: String,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub half_days: i64,
}

/// Record count for one status value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// Present-record count for one day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}
