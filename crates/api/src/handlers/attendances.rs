//! Handlers for the `/attendances` resource: CRUD plus the analytics and
//! fleet-wide statistics endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staffhub_core::attendance::{validate_times, AttendanceStatus};
use staffhub_core::error::CoreError;
use staffhub_core::stats::attendance_percentage;
use staffhub_core::types::DbId;
use staffhub_db::models::attendance::{
    Attendance, AttendanceResponse, CreateAttendance, DailyCount, StatusCount,
};
use staffhub_db::repositories::AttendanceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{DateRange, DateRangeQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the attendance list.
#[derive(Debug, Deserialize)]
pub struct AttendanceListQuery {
    pub employee: Option<DbId>,
    pub status: Option<AttendanceStatus>,
    pub date: Option<NaiveDate>,
}

/// Fleet-wide attendance analytics over a date range.
#[derive(Debug, Serialize)]
pub struct AttendanceAnalytics {
    pub date_range: DateRange,
    pub total_records: i64,
    pub status_distribution: Vec<StatusCount>,
    pub daily_attendance: Vec<DailyCount>,
}

/// One employee's summary inside the fleet-wide statistics response.
#[derive(Debug, Serialize)]
pub struct EmployeeSummary {
    pub employee_code: String,
    pub employee_name: String,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub half_days: i64,
    pub attendance_percentage: f64,
}

/// Fleet-wide per-employee statistics over a date range.
#[derive(Debug, Serialize)]
pub struct FleetStats {
    pub date_range: DateRange,
    pub employee_stats: Vec<EmployeeSummary>,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/attendances
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<AttendanceListQuery>,
) -> AppResult<Json<Vec<AttendanceResponse>>> {
    let records = AttendanceRepo::list(
        &state.pool,
        params.employee,
        params.status.map(AttendanceStatus::as_str),
        params.date,
    )
    .await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/attendances
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateAttendance>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    admit(&state, &input, None).await?;

    let record = AttendanceRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/attendances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AttendanceResponse>> {
    let record = AttendanceRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attendance record",
            id,
        }))?;
    Ok(Json(record.into()))
}

/// PUT /api/v1/attendances/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateAttendance>,
) -> AppResult<Json<Attendance>> {
    // The record being replaced must not conflict with itself.
    admit(&state, &input, Some(id)).await?;

    let record = AttendanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attendance record",
            id,
        }))?;
    Ok(Json(record))
}

/// DELETE /api/v1/attendances/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AttendanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Attendance record",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/attendances/analytics
///
/// Fleet-wide record count, per-status distribution, and daily present
/// counts over the inclusive range. Defaults to the trailing 30 days.
pub async fn analytics(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<AttendanceAnalytics>>> {
    let (start_date, end_date) = params.resolve();

    let total_records = AttendanceRepo::count_in_range(&state.pool, start_date, end_date).await?;
    let status_distribution =
        AttendanceRepo::status_distribution(&state.pool, start_date, end_date).await?;
    let daily_attendance =
        AttendanceRepo::daily_present_counts(&state.pool, start_date, end_date).await?;

    let analytics = AttendanceAnalytics {
        date_range: DateRange {
            start_date,
            end_date,
        },
        total_records,
        status_distribution,
        daily_attendance,
    };

    Ok(Json(DataResponse { data: analytics }))
}

/// GET /api/v1/attendances/bulk-stats
///
/// Per-employee summaries for every active employee over the inclusive
/// range. Employees with no records in range appear with zero counts and a
/// 0.0 percentage.
pub async fn bulk_stats(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<FleetStats>>> {
    let (start_date, end_date) = params.resolve();

    let counts = AttendanceRepo::fleet_status_counts(&state.pool, start_date, end_date).await?;
    let employee_stats = counts
        .into_iter()
        .map(|c| EmployeeSummary {
            employee_code: c.employee_code,
            employee_name: c.employee_name,
            total_days: c.total_days,
            present_days: c.present_days,
            absent_days: c.absent_days,
            late_days: c.late_days,
            half_days: c.half_days,
            attendance_percentage: attendance_percentage(c.present_days, c.total_days),
        })
        .collect();

    let stats = FleetStats {
        date_range: DateRange {
            start_date,
            end_date,
        },
        employee_stats,
    };

    Ok(Json(DataResponse { data: stats }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the admission rules for an attendance candidate, in order: the
/// duplicate pre-check on (employee, date), then the present-requires-
/// check-in rule. Check-out before check-in is deliberately admitted (it
/// reads as an overnight shift).
async fn admit(
    state: &AppState,
    input: &CreateAttendance,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    let exists = AttendanceRepo::exists_for_employee_date(
        &state.pool,
        input.employee_id,
        input.date,
        exclude_id,
    )
    .await?;
    if exists {
        return Err(AppError::Core(CoreError::Conflict(
            "Attendance record already exists for this employee on this date".into(),
        )));
    }

    validate_times(input.status, input.check_in_time)?;
    Ok(())
}
