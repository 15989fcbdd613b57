//! Handlers for the organisation-level analytics dashboard and the public
//! stats banner.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use staffhub_db::models::attendance::{DailyCount, StatusCount};
use staffhub_db::models::department::DepartmentHeadcount;
use staffhub_db::models::performance::RatingCount;
use staffhub_db::repositories::{AttendanceRepo, DepartmentRepo, EmployeeRepo, PerformanceRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Days of recent-joiner history shown on the dashboard.
const RECENT_JOINER_DAYS: i64 = 30;
/// Days of attendance history shown on the dashboard.
const ATTENDANCE_WINDOW_DAYS: i64 = 7;

/// Organisation dashboard payload.
#[derive(Debug, Serialize)]
pub struct EmployeeAnalytics {
    pub total_employees: i64,
    pub recent_joiners: i64,
    pub department_distribution: Vec<DepartmentHeadcount>,
    pub performance_distribution: Vec<RatingCount>,
    pub daily_attendance: Vec<DailyCount>,
    pub status_distribution: Vec<StatusCount>,
}

/// Public stats banner payload (no authentication).
#[derive(Debug, Serialize)]
pub struct PublicStats {
    pub message: &'static str,
    pub total_employees: i64,
    pub total_departments: i64,
}

/// GET /api/v1/analytics/employees
///
/// Organisation dashboard: active headcount, joiners in the last 30 days,
/// per-department headcount, rating distribution, and the last 7 days of
/// attendance.
pub async fn employee_analytics(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<EmployeeAnalytics>>> {
    let today = Utc::now().date_naive();
    let joined_since = today - Duration::days(RECENT_JOINER_DAYS);
    let window_start = today - Duration::days(ATTENDANCE_WINDOW_DAYS);

    let total_employees = EmployeeRepo::count_active(&state.pool).await?;
    let recent_joiners = EmployeeRepo::count_joined_since(&state.pool, joined_since).await?;
    let department_distribution = DepartmentRepo::headcounts(&state.pool).await?;
    let performance_distribution = PerformanceRepo::rating_distribution(&state.pool).await?;
    let daily_attendance =
        AttendanceRepo::daily_present_counts(&state.pool, window_start, today).await?;
    let status_distribution =
        AttendanceRepo::status_distribution(&state.pool, window_start, today).await?;

    let analytics = EmployeeAnalytics {
        total_employees,
        recent_joiners,
        department_distribution,
        performance_distribution,
        daily_attendance,
        status_distribution,
    };

    Ok(Json(DataResponse { data: analytics }))
}

/// GET /api/v1/stats
///
/// Public (unauthenticated) service banner with headline counts.
pub async fn public_stats(State(state): State<AppState>) -> AppResult<Json<PublicStats>> {
    let total_employees = EmployeeRepo::count_active(&state.pool).await?;
    let total_departments = DepartmentRepo::count(&state.pool).await?;

    Ok(Json(PublicStats {
        message: "StaffHub public API active",
        total_employees,
        total_departments,
    }))
}
