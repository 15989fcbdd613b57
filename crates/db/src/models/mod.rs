//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/replace DTO for writes
//! - `FromRow` view structs for rows produced by JOIN/aggregate queries

pub mod attendance;
pub mod department;
pub mod employee;
pub mod performance;
pub mod session;
pub mod user;
