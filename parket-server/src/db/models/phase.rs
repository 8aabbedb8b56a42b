//! Phase Model

use super::serde_helpers;
use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Phase entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Owning project record
    #[serde(with = "serde_thing")]
    pub project: Thing,
    pub name: String,
    /// Phase-level discount (percent, e.g. 10 = 10%)
    pub phase_discount: Option<f64>,
    /// Whether the phase discount is applied to offer totals
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub discount_enabled: bool,
    /// Whether architect commission is added to offer totals
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub include_architect_commission: bool,
    /// Architect commission (percent of the pre-discount subtotal)
    pub architect_commission_percent: Option<f64>,
    /// Display position among the project's phases
    #[serde(default)]
    pub sort_order: i32,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create phase payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseCreate {
    /// Owning project id as string (e.g. "project:xxx")
    pub project: String,
    pub name: String,
    pub phase_discount: Option<f64>,
    pub discount_enabled: Option<bool>,
    pub include_architect_commission: Option<bool>,
    pub architect_commission_percent: Option<f64>,
    pub sort_order: Option<i32>,
    pub notes: Option<String>,
}

/// Update phase payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_architect_commission: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architect_commission_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
