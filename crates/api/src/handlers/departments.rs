//! Handlers for the `/departments` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use staffhub_core::error::CoreError;
use staffhub_core::types::DbId;
use staffhub_db::models::department::{CreateDepartment, DepartmentWithCount};
use staffhub_db::repositories::DepartmentRepo;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the department list.
#[derive(Debug, Deserialize)]
pub struct DepartmentListQuery {
    /// Free-text match on name or description.
    pub q: Option<String>,
}

/// GET /api/v1/departments
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<DepartmentListQuery>,
) -> AppResult<Json<Vec<DepartmentWithCount>>> {
    let departments = DepartmentRepo::list(&state.pool, params.q.as_deref()).await?;
    Ok(Json(departments))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<DepartmentWithCount>)> {
    input.validate().map_err(|e| validation_error(&e))?;

    let department = DepartmentRepo::insert(&state.pool, &input).await?;
    // Re-read through the headcount view so the response shape matches GET.
    let department = DepartmentRepo::get(&state.pool, department.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Department vanished after insert".into()))?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DepartmentWithCount>> {
    let department = DepartmentRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    Ok(Json(department))
}

/// PUT /api/v1/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<Json<DepartmentWithCount>> {
    input.validate().map_err(|e| validation_error(&e))?;

    DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    let department = DepartmentRepo::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::InternalError("Department vanished after update".into()))?;
    Ok(Json(department))
}

/// DELETE /api/v1/departments/{id}
///
/// Cascades to the department's employees.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DepartmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))
    }
}
