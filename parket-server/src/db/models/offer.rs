//! Offer Model
//!
//! An offer points at a phase; its monetary content is always computed
//! live from the phase tree, never snapshotted into the record.

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Offer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Document number, unique across offers
    pub number: i64,
    /// Phase whose variants this offer prices
    #[serde(with = "serde_thing")]
    pub phase: Thing,
    #[serde(default, with = "serde_thing::option")]
    pub client: Option<Thing>,
    /// Issue date (milliseconds since epoch)
    pub issue_date: Option<i64>,
    /// Expiry date (milliseconds since epoch)
    pub valid_until: Option<i64>,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferCreate {
    /// Document number; generated server-side when absent
    pub number: Option<i64>,
    /// Phase id as string (e.g. "phase:xxx")
    pub phase: String,
    /// Client id as string (e.g. "client:xxx")
    pub client: Option<String>,
    /// Issue date (milliseconds since epoch)
    pub issue_date: Option<i64>,
    /// Expiry date (milliseconds since epoch)
    pub valid_until: Option<i64>,
    pub notes: Option<String>,
}

/// Update offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferUpdate {
    /// Issue date (milliseconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<i64>,
    /// Expiry date (milliseconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
