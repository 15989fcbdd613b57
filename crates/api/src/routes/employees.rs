//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes mounted at `/employees`.
///
/// ```text
/// GET    /                        -> list (filters + ?q=)
/// POST   /                        -> create
/// GET    /search                  -> search (capped at 50 rows)
/// GET    /{id}                    -> get_by_id (detail view)
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete (cascades to records)
/// GET    /{id}/attendance-stats   -> attendance_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employees::list).post(employees::create))
        .route("/search", get(employees::search))
        .route(
            "/{id}",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/{id}/attendance-stats", get(employees::attendance_stats))
}
