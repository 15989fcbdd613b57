//! Route definitions for the `/attendances` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::attendances;
use crate::state::AppState;

/// Attendance routes mounted at `/attendances`.
///
/// ```text
/// GET    /            -> list (filters: employee, status, date)
/// POST   /            -> create
/// GET    /analytics   -> analytics (fleet-wide distribution)
/// GET    /bulk-stats  -> bulk_stats (per-employee summaries)
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attendances::list).post(attendances::create))
        .route("/analytics", get(attendances::analytics))
        .route("/bulk-stats", get(attendances::bulk_stats))
        .route(
            "/{id}",
            get(attendances::get_by_id)
                .put(attendances::update)
                .delete(attendances::delete),
        )
}
