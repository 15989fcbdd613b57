pub mod attendances;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod performances;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/token                          obtain token pair (public)
/// /auth/token/refresh                  rotate refresh token (public)
///
/// /departments                         list, create
/// /departments/{id}                    get, update, delete
///
/// /employees                           list, create
/// /employees/search                    free-text search (max 50 rows)
/// /employees/{id}                      get, update, delete
/// /employees/{id}/attendance-stats     per-employee attendance summary
///
/// /performances                        list, create
/// /performances/{id}                   get, update, delete
///
/// /attendances                         list, create
/// /attendances/analytics               fleet-wide attendance analytics
/// /attendances/bulk-stats              per-employee fleet summaries
/// /attendances/{id}                    get, update, delete
///
/// /analytics/employees                 organisation dashboard
/// /stats                               public headline counts (no auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Token issuance (login, refresh).
        .nest("/auth", auth::router())
        // Org structure.
        .nest("/departments", departments::router())
        .nest("/employees", employees::router())
        // Reviews and attendance (includes statistics endpoints).
        .nest("/performances", performances::router())
        .nest("/attendances", attendances::router())
        // Organisation dashboard.
        .route("/analytics/employees", get(handlers::analytics::employee_analytics))
        // Public stats banner.
        .route("/stats", get(handlers::analytics::public_stats))
}
