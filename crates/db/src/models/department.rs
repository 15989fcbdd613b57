//! Department entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::types::{DbId, Timestamp};
use validator::Validate;

/// A department row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Department with its active-employee headcount, as returned by read
/// queries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentWithCount {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub employee_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Department name with its total employee headcount, for the analytics
/// dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentHeadcount {
    pub name: String,
    pub employee_count: i64,
}

/// DTO for creating or replacing a department.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDepartment {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}
