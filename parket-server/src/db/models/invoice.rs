//! Invoice Model

use super::serde_helpers;
use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Invoice entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Document number, unique across invoices
    pub number: i64,
    #[serde(default, with = "serde_thing::option")]
    pub order: Option<Thing>,
    #[serde(default, with = "serde_thing::option")]
    pub client: Option<Thing>,
    /// Issue date (milliseconds since epoch)
    pub issue_date: Option<i64>,
    /// Invoice amount (BGN)
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub paid: bool,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create invoice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCreate {
    /// Document number; generated server-side when absent
    pub number: Option<i64>,
    /// Order id as string (e.g. "order:xxx")
    pub order: Option<String>,
    /// Client id as string (e.g. "client:xxx")
    pub client: Option<String>,
    /// Issue date (milliseconds since epoch)
    pub issue_date: Option<i64>,
    pub amount: Option<f64>,
    pub paid: Option<bool>,
    pub notes: Option<String>,
}

/// Update invoice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    /// Issue date (milliseconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
