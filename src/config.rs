//! Filter Configuration
//!
//! Optional settings the server can embed as a JSON island. Every field has
//! a default, so a page without the island behaves the same as one with `{}`.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::money::DEFAULT_CURRENCY_SYMBOL;
use crate::page;

pub const CONFIG_ELEMENT_ID: &str = "filters-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Id of the transactions payload island
    pub data_element_id: String,
    /// Quiet period before an amount input applies
    pub amount_debounce_ms: u32,
    pub currency_symbol: String,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            data_element_id: "transactions-data".to_string(),
            amount_debounce_ms: 500,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FilterConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config island. Absent means defaults; invalid is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match page::read_island(CONFIG_ELEMENT_ID) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = FilterConfig::from_json("{}").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.data_element_id, "transactions-data");
        assert_eq!(config.amount_debounce_ms, 500);
        assert_eq!(config.currency_symbol, "R$");
    }

    #[test]
    fn test_partial_override() {
        let config = FilterConfig::from_json(r#"{"amount_debounce_ms": 250, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.amount_debounce_ms, 250);
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.currency_symbol, "R$");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(FilterConfig::from_json("[1,"), Err(ConfigError::Invalid(_))));
        assert!(FilterConfig::from_json(r#"{"amount_debounce_ms": "soon"}"#).is_err());
    }

    #[test]
    fn test_log_level_names() {
        let with = |level: &str| FilterConfig {
            log_level: level.to_string(),
            ..FilterConfig::default()
        };
        assert_eq!(with("WARN").log_level(), LevelFilter::Warn);
        assert_eq!(with("off").log_level(), LevelFilter::Off);
        assert_eq!(with("loud").log_level(), LevelFilter::Info);
    }
}
