//! Route definitions for token issuance.
//!
//! Both endpoints are public: they are how a client obtains credentials.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Token routes mounted at `/auth`.
///
/// ```text
/// POST /token          -> login (public)
/// POST /token/refresh  -> refresh (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(auth::login))
        .route("/token/refresh", post(auth::refresh))
}
