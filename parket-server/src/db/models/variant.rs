//! Variant Model

use super::serde_helpers;
use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Variant entity
///
/// One alternative material selection for a phase. Sibling variants
/// compete for inclusion in the client offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Owning phase record
    #[serde(with = "serde_thing")]
    pub phase: Thing,
    pub name: String,
    /// Whether this variant counts toward offer totals
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub include_in_offer: bool,
    /// Fallback discount for rooms/products that define none (percent)
    pub variant_discount: Option<f64>,
    /// Commission shown on the variant breakdown (percent)
    pub architect_commission: Option<f64>,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create variant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantCreate {
    /// Owning phase id as string (e.g. "phase:xxx")
    pub phase: String,
    pub name: String,
    pub include_in_offer: Option<bool>,
    pub variant_discount: Option<f64>,
    pub architect_commission: Option<f64>,
    pub notes: Option<String>,
}

/// Update variant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_in_offer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architect_commission: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
