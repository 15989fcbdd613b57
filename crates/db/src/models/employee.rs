//! Employee entity models and DTOs.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffhub_core::types::{DbId, Timestamp};
use validator::Validate;

/// Accepts international numbers like `+1234567890` (9-15 digits).
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone regex must compile"));

/// An employee row as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department_id: DbId,
    pub date_joined: NaiveDate,
    pub position: String,
    pub salary: Option<Decimal>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Summary row for employee listings and search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeListRow {
    pub id: DbId,
    pub employee_id: String,
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_name: String,
    pub position: String,
    pub is_active: bool,
    pub date_joined: NaiveDate,
}

/// Detail view: the full row plus department name and per-employee record
/// counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeDetail {
    pub id: DbId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub department_id: DbId,
    pub department_name: String,
    pub date_joined: NaiveDate,
    pub position: String,
    pub salary: Option<Decimal>,
    pub is_active: bool,
    pub performance_count: i64,
    pub attendance_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing an employee.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 20))]
    pub employee_id: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(regex(
        path = *PHONE_REGEX,
        message = "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed."
    ))]
    pub phone_number: String,
    pub address: String,
    pub department_id: DbId,
    pub date_joined: NaiveDate,
    #[serde(default)]
    pub position: String,
    pub salary: Option<Decimal>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
