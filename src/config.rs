//! Startup configuration.
//!
//! The core has no persisted state; these values are supplied once when the
//! [`Fabric`](crate::fsm::Fabric) is built.  The motor always boots in
//! `Stopped`, so only the cabin side is configurable.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::events::Floor;

/// Maximum length of a cabin label.
pub const LABEL_CAP: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevatorConfig {
    /// Floor the cabin is parked at on boot.  Seeds both `current_floor`
    /// and `destination_floor`.
    pub ground_floor: Floor,
    /// Cabin name used in log lines.
    pub label: String<LABEL_CAP>,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        let mut label = String::new();
        // "car-1" is well under LABEL_CAP
        let _ = label.push_str("car-1");
        Self {
            ground_floor: 0,
            label,
        }
    }
}

impl ElevatorConfig {
    /// Parse a JSON document and validate it.  Missing fields fall back to
    /// their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make log output or diagnostics ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Config("label must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = ElevatorConfig::default();
        assert_eq!(c.ground_floor, 0);
        assert_eq!(c.label.as_str(), "car-1");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn json_overrides_ground_floor() {
        let c = ElevatorConfig::from_json(r#"{"ground_floor": -2, "label": "freight"}"#).unwrap();
        assert_eq!(c.ground_floor, -2);
        assert_eq!(c.label.as_str(), "freight");
    }

    #[test]
    fn json_missing_fields_use_defaults() {
        let c = ElevatorConfig::from_json(r#"{"ground_floor": 3}"#).unwrap();
        assert_eq!(c.ground_floor, 3);
        assert_eq!(c.label.as_str(), "car-1");
    }

    #[test]
    fn empty_label_rejected() {
        let err = ElevatorConfig::from_json(r#"{"label": "  "}"#).unwrap_err();
        assert_eq!(err, Error::Config("label must not be empty"));
    }

    #[test]
    fn oversized_label_rejected() {
        let err = ElevatorConfig::from_json(r#"{"label": "a-very-long-cabin-name"}"#).unwrap_err();
        assert_eq!(err, Error::Config("malformed JSON"));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(ElevatorConfig::from_json("{ground_floor: 1").is_err());
    }
}
