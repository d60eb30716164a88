//! # Shell Configuration
//!
//! Display configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKBOOK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no locking is
//! needed anywhere.

use serde::{Deserialize, Serialize};

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Title shown in the menu banner.
    /// Override with `STOCKBOOK_TITLE`.
    pub title: String,

    /// Currency symbol prefixed to the inventory total.
    /// Override with `STOCKBOOK_CURRENCY`.
    pub currency_symbol: String,
}

impl Default for ShellConfig {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Title: "Inventory System"
    /// - Currency: "$"
    fn default() -> Self {
        ShellConfig {
            title: "Inventory System".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ShellConfig {
    /// Builds the configuration from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = ShellConfig::default();

        if let Ok(title) = std::env::var("STOCKBOOK_TITLE") {
            config.title = title;
        }
        if let Ok(symbol) = std::env::var("STOCKBOOK_CURRENCY") {
            config.currency_symbol = symbol;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Inventory System");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("STOCKBOOK_TITLE", "Backroom Stock");
        let config = ShellConfig::from_env();
        assert_eq!(config.title, "Backroom Stock");
        assert_eq!(config.currency_symbol, "$");
        std::env::remove_var("STOCKBOOK_TITLE");
    }
}
