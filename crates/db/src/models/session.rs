//! Session entity models (refresh-token rotation).

use sqlx::FromRow;
use staffhub_core::types::{DbId, Timestamp};

/// A refresh-token session row. Only the SHA-256 hash of the refresh token
/// is stored; the plaintext never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
