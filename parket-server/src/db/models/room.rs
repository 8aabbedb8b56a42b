//! Room Model

use super::serde_helpers;
use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Owning variant record
    #[serde(with = "serde_thing")]
    pub variant: Thing,
    pub name: String,
    /// Floor area (m2), default quantity for products that define none
    #[serde(default)]
    pub area: f64,
    /// Room-level discount (percent), used by products without an override
    pub discount: Option<f64>,
    /// Whether the room discount participates in the fallback chain
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub discount_enabled: bool,
    /// Default waste factor for products in this room (percent)
    pub waste_percent: Option<f64>,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    /// Owning variant id as string (e.g. "variant:xxx")
    pub variant: String,
    pub name: String,
    pub area: Option<f64>,
    pub discount: Option<f64>,
    pub discount_enabled: Option<bool>,
    pub waste_percent: Option<f64>,
    pub notes: Option<String>,
}

/// Update room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
