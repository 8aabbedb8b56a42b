//! Shared types for the Parket platform
//!
//! Common types used across crates: error codes and API response
//! structures, order status derivation, pricing input records, and small
//! utility helpers.

pub mod error;
pub mod order;
pub mod pricing;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Order status re-exports
pub use order::{ConfirmationStatus, DeliveryStatus, OverallStatus, PaymentStatus};
