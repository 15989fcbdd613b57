//! Route definitions for the `/performances` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::performances;
use crate::state::AppState;

/// Performance review routes mounted at `/performances`.
///
/// ```text
/// GET    /      -> list (filters: employee, rating)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(performances::list).post(performances::create))
        .route(
            "/{id}",
            get(performances::get_by_id)
                .put(performances::update)
                .delete(performances::delete),
        )
}
