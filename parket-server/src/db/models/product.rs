//! Catalog Product Model

use super::serde_helpers;
use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Catalog product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Manufacturer article code, unique across the catalog
    pub code: String,
    pub name: String,
    pub manufacturer: Option<String>,
    /// Free-text grouping (parquet, laminate, skirting, adhesive)
    pub category: Option<String>,
    /// Measurement unit (m2, lm, pcs)
    pub unit: Option<String>,
    /// Purchase cost (EUR)
    pub cost_eur: Option<f64>,
    /// Purchase cost (BGN)
    pub cost_bgn: Option<f64>,
    /// Margin on sale price (percent, must stay below 100)
    pub markup: Option<f64>,
    /// Sale price (BGN)
    pub sale_bgn: Option<f64>,
    /// Sale price (EUR)
    pub sale_eur: Option<f64>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create product payload
///
/// Missing cost/sale fields are back-filled at creation time from the
/// fixed EUR rate and the markup formula before the record is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub code: String,
    pub name: String,
    pub manufacturer: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub cost_eur: Option<f64>,
    pub cost_bgn: Option<f64>,
    pub markup: Option<f64>,
    pub sale_bgn: Option<f64>,
    pub sale_eur: Option<f64>,
    pub is_active: Option<bool>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_eur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_bgn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_bgn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_eur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
