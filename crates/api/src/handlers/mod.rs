//! HTTP request handlers, one module per resource.

pub mod analytics;
pub mod attendances;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod performances;
