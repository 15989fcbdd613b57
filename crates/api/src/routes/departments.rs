//! Route definitions for the `/departments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::departments;
use crate::state::AppState;

/// Department routes mounted at `/departments`.
///
/// ```text
/// GET    /      -> list (?q= free-text)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete (cascades to employees)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(departments::list).post(departments::create))
        .route(
            "/{id}",
            get(departments::get_by_id)
                .put(departments::update)
                .delete(departments::delete),
        )
}
