//! Supplier Order Model
//!
//! Orders carry three independent workflow statuses. The displayed
//! overall status is derived from them on every read and never stored.

use super::serde_thing;
use serde::{Deserialize, Serialize};
use shared::{ConfirmationStatus, DeliveryStatus, PaymentStatus};
use surrealdb::sql::Thing;

/// Supplier order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Document number, unique across orders
    pub number: i64,
    #[serde(default, with = "serde_thing::option")]
    pub client: Option<Thing>,
    #[serde(default, with = "serde_thing::option")]
    pub project: Option<Thing>,
    pub supplier: Option<String>,
    pub description: Option<String>,
    /// Order amount (BGN)
    pub amount: Option<f64>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub delivery_status: DeliveryStatus,
    /// Expected delivery date (milliseconds since epoch)
    pub expected_delivery: Option<i64>,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Document number; generated server-side when absent
    pub number: Option<i64>,
    /// Client id as string (e.g. "client:xxx")
    pub client: Option<String>,
    /// Project id as string (e.g. "project:xxx")
    pub project: Option<String>,
    pub supplier: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub confirmation_status: Option<ConfirmationStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_status: Option<DeliveryStatus>,
    /// Expected delivery date (milliseconds since epoch)
    pub expected_delivery: Option<i64>,
    pub notes: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<ConfirmationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<DeliveryStatus>,
    /// Expected delivery date (milliseconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
