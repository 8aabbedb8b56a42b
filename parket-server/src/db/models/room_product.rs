//! Room Product Model
//!
//! A line item inside a room. When created from a catalog product the
//! description and unit price are copied in at creation time, so later
//! catalog edits never rewrite existing offers.

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Room product entity (line item)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomProduct {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Owning room record
    #[serde(with = "serde_thing")]
    pub room: Thing,
    /// Originating catalog product, if the line was picked from the catalog
    #[serde(default, with = "serde_thing::option")]
    pub product: Option<Thing>,
    pub description: Option<String>,
    /// Billed quantity before waste; falls back to the room area when unset
    pub quantity: Option<f64>,
    /// Measurement unit (m2, lm, pcs)
    pub unit: Option<String>,
    /// Unit price (BGN)
    pub unit_price: Option<f64>,
    /// Line discount override (percent)
    pub discount: Option<f64>,
    /// Line waste override (percent)
    pub waste_percent: Option<f64>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create room product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomProductCreate {
    /// Owning room id as string (e.g. "room:xxx")
    pub room: String,
    /// Catalog product id as string (e.g. "product:xxx")
    pub product: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    pub discount: Option<f64>,
    pub waste_percent: Option<f64>,
}

/// Update room product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_percent: Option<f64>,
}
