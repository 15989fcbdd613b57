//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope used by the statistics and
/// analytics endpoints.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: stats }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
