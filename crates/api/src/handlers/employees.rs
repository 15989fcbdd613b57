//! Handlers for the `/employees` resource, including free-text search and
//! the per-employee attendance statistics endpoint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use staffhub_core::error::CoreError;
use staffhub_core::stats::attendance_percentage;
use staffhub_core::types::DbId;
use staffhub_db::models::employee::{CreateEmployee, Employee, EmployeeDetail, EmployeeListRow};
use staffhub_db::repositories::{AttendanceRepo, EmployeeRepo};
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{DateRange, DateRangeQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the employee list.
#[derive(Debug, Deserialize)]
pub struct EmployeeListQuery {
    pub department: Option<DbId>,
    pub is_active: Option<bool>,
    pub position: Option<String>,
    /// Free-text match on first/last name, email, or employee code.
    pub q: Option<String>,
}

/// Query parameters for `/employees/search`.
#[derive(Debug, Deserialize)]
pub struct EmployeeSearchQuery {
    pub q: Option<String>,
    pub department: Option<DbId>,
    pub is_active: Option<bool>,
}

/// Per-employee attendance summary over a date range.
#[derive(Debug, Serialize)]
pub struct EmployeeAttendanceStats {
    pub employee_code: String,
    pub employee_name: String,
    pub date_range: DateRange,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub half_days: i64,
    pub attendance_percentage: f64,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/employees
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EmployeeListQuery>,
) -> AppResult<Json<Vec<EmployeeListRow>>> {
    let employees = EmployeeRepo::list(
        &state.pool,
        params.department,
        params.is_active,
        params.position.as_deref(),
        params.q.as_deref(),
    )
    .await?;
    Ok(Json(employees))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    input.validate().map_err(|e| validation_error(&e))?;
    ensure_unique_code(&state, &input.employee_id, None).await?;

    let employee = EmployeeRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<EmployeeDetail>> {
    let employee = EmployeeRepo::get_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// PUT /api/v1/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<Json<Employee>> {
    input.validate().map_err(|e| validation_error(&e))?;
    ensure_unique_code(&state, &input.employee_id, Some(id)).await?;

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(employee))
}

/// DELETE /api/v1/employees/{id}
///
/// Cascades to the employee's reviews and attendance records.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}

/// GET /api/v1/employees/search
///
/// Free-text search capped at 50 rows.
pub async fn search(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<EmployeeSearchQuery>,
) -> AppResult<Json<Vec<EmployeeListRow>>> {
    let employees = EmployeeRepo::search(
        &state.pool,
        params.q.as_deref(),
        params.department,
        params.is_active,
    )
    .await?;
    Ok(Json(employees))
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// GET /api/v1/employees/{id}/attendance-stats
///
/// Per-status counts and the attendance percentage for one employee over
/// the inclusive range. Defaults to the trailing 30 days.
pub async fn attendance_stats(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<DateRangeQuery>,
) -> AppResult<Json<DataResponse<EmployeeAttendanceStats>>> {
    let employee = EmployeeRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let (start_date, end_date) = params.resolve();
    let counts = AttendanceRepo::status_counts(&state.pool, id, start_date, end_date).await?;

    let stats = EmployeeAttendanceStats {
        employee_code: employee.employee_id,
        employee_name: format!("{} {}", employee.first_name, employee.last_name),
        date_range: DateRange {
            start_date,
            end_date,
        },
        total_days: counts.total_days,
        present_days: counts.present_days,
        absent_days: counts.absent_days,
        late_days: counts.late_days,
        half_days: counts.half_days,
        attendance_percentage: attendance_percentage(counts.present_days, counts.total_days),
    };

    Ok(Json(DataResponse { data: stats }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Advisory duplicate pre-check on the external employee code; the unique
/// constraint backstops it under concurrency.
async fn ensure_unique_code(
    state: &AppState,
    employee_code: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if EmployeeRepo::exists_by_employee_code(&state.pool, employee_code, exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Employee ID already exists".into(),
        )));
    }
    Ok(())
}
