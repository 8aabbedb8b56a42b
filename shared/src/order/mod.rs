//! Order status types
//!
//! This module provides the three order sub-status enums and the derived
//! overall status used for list badges and filtering.

pub mod status;

// Re-exports
pub use status::{ConfirmationStatus, DeliveryStatus, OverallStatus, PaymentStatus};
