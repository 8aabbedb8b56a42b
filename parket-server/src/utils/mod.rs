//! Utility module: shared helpers used across the server.
//!
//! # Contents
//!
//! - [`AppError`] / [`ApiResponse`] - error and response types (from `shared::error`)
//! - [`logger`] - tracing setup
//! - [`validation`] - input length checks

pub mod logger;
pub mod validation;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
