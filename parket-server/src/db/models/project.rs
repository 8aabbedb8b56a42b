//! Project Model

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// Owning client record
    #[serde(with = "serde_thing")]
    pub client: Thing,
    pub name: String,
    /// Construction site address, not the client's billing address
    pub site_address: Option<String>,
    pub architect: Option<String>,
    pub notes: Option<String>,
    /// Created timestamp (milliseconds since epoch)
    #[serde(default)]
    pub created_at: i64,
}

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    /// Owning client id as string (e.g. "client:xxx")
    pub client: String,
    pub name: String,
    pub site_address: Option<String>,
    pub architect: Option<String>,
    pub notes: Option<String>,
}

/// Update project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
