//! Expedition configuration with documented constants
//!
//! The rules constants live here so a driver can tune pacing from a TOML
//! file instead of recompiling.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::calendar::WATCHES_PER_DAY;
use super::error::{ExpeditionError, Result};

/// Stress added to a crew member who reaches a day boundary unrested
pub const EXHAUSTION_PENALTY: u32 = 10;

/// Configuration for an expedition run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpeditionConfig {
    /// Number of watches making up one day
    ///
    /// The time keeper applies exhaustion whenever the elapsed watch count
    /// reaches a multiple of this value.
    pub watches_per_day: u64,

    /// Stress added at a day boundary to every crew member not rested
    pub exhaustion_penalty: u32,

    /// Seed for the dice; `None` lets the driver pick one
    pub seed: Option<u64>,
}

impl Default for ExpeditionConfig {
    fn default() -> Self {
        Self {
            watches_per_day: WATCHES_PER_DAY,
            exhaustion_penalty: EXHAUSTION_PENALTY,
            seed: None,
        }
    }
}

impl ExpeditionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExpeditionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.watches_per_day == 0 {
            return Err(ExpeditionError::InvalidConfig(
                "watches_per_day must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExpeditionConfig::default();
        assert_eq!(config.watches_per_day, 6);
        assert_eq!(config.exhaustion_penalty, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExpeditionConfig::from_toml_str("seed = 42\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.watches_per_day, 6);
        assert_eq!(config.exhaustion_penalty, 10);
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            watches_per_day = 4
            exhaustion_penalty = 5
            seed = 7
        "#;
        let config = ExpeditionConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.watches_per_day, 4);
        assert_eq!(config.exhaustion_penalty, 5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_zero_watches_rejected() {
        let err = ExpeditionConfig::from_toml_str("watches_per_day = 0").unwrap_err();
        assert!(matches!(err, ExpeditionError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = ExpeditionConfig::from_toml_str("watches_per_day = \"six\"").unwrap_err();
        assert!(matches!(err, ExpeditionError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ExpeditionConfig::load_file(Path::new("/nonexistent/expedition.toml"))
            .unwrap_err();
        assert!(matches!(err, ExpeditionError::Io(_)));
    }
}
