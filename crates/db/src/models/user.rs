//! User entity models (identity store for token issuance).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::types::{DbId, Timestamp};

/// A user row as stored. The password hash is an Argon2id PHC string and is
/// never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public user info, safe to embed in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    /// Pre-hashed PHC string; hashing happens in the API layer.
    pub password_hash: String,
}
