//! Handlers for the `/performances` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use staffhub_core::error::CoreError;
use staffhub_core::types::DbId;
use staffhub_db::models::performance::{
    CreatePerformanceReview, PerformanceReview, PerformanceReviewResponse,
};
use staffhub_db::repositories::PerformanceRepo;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the review list.
#[derive(Debug, Deserialize)]
pub struct PerformanceListQuery {
    pub employee: Option<DbId>,
    pub rating: Option<i32>,
}

/// GET /api/v1/performances
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PerformanceListQuery>,
) -> AppResult<Json<Vec<PerformanceReviewResponse>>> {
    let reviews = PerformanceRepo::list(&state.pool, params.employee, params.rating).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/performances
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePerformanceReview>,
) -> AppResult<(StatusCode, Json<PerformanceReview>)> {
    input.validate().map_err(|e| validation_error(&e))?;
    ensure_no_duplicate(&state, &input, None).await?;

    let review = PerformanceRepo::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/performances/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PerformanceReviewResponse>> {
    let review = PerformanceRepo::get(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Performance review",
            id,
        }))?;
    Ok(Json(review.into()))
}

/// PUT /api/v1/performances/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePerformanceReview>,
) -> AppResult<Json<PerformanceReview>> {
    input.validate().map_err(|e| validation_error(&e))?;
    // The record being replaced must not conflict with itself.
    ensure_no_duplicate(&state, &input, Some(id)).await?;

    let review = PerformanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Performance review",
            id,
        }))?;
    Ok(Json(review))
}

/// DELETE /api/v1/performances/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PerformanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Performance review",
            id,
        }))
    }
}

/// Advisory duplicate pre-check on (employee, review_date); the unique
/// constraint backstops it under concurrency.
async fn ensure_no_duplicate(
    state: &AppState,
    input: &CreatePerformanceReview,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    let exists = PerformanceRepo::exists_for_employee_date(
        &state.pool,
        input.employee_id,
        input.review_date,
        exclude_id,
    )
    .await?;
    if exists {
        return Err(AppError::Core(CoreError::Conflict(
            "Performance record already exists for this employee on this date".into(),
        )));
    }
    Ok(())
}
