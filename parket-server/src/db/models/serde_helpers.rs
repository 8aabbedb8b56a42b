//! Common serde helpers for handling null values from SurrealDB
//!
//! Older records miss some boolean columns entirely, and the frontend
//! sends explicit nulls for unchecked toggles. Both must land on the
//! field's documented default instead of failing deserialization.

use serde::{Deserialize, Deserializer};

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// Deserialize bool that treats null as false
pub fn bool_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default = "default_true", deserialize_with = "super::bool_true")]
        enabled: bool,
        #[serde(default, deserialize_with = "super::bool_false")]
        archived: bool,
    }

    fn default_true() -> bool {
        true
    }

    #[test]
    fn test_null_falls_back_to_default() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": null, "archived": null}"#).unwrap();
        assert!(flags.enabled);
        assert!(!flags.archived);
    }

    #[test]
    fn test_explicit_values_win() {
        let flags: Flags = serde_json::from_str(r#"{"enabled": false, "archived": true}"#).unwrap();
        assert!(!flags.enabled);
        assert!(flags.archived);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: Flags = serde_json::from_str("{}").unwrap();
        assert!(flags.enabled);
        assert!(!flags.archived);
    }
}
