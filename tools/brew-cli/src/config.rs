//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`brewdash.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Device storage configuration.
    #[serde(default)]
    pub device: DeviceConfig,
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Application name shown in headers.
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency code (e.g. "INR").
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: default_currency(),
        }
    }
}

/// Device storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Path to the device storage file. Defaults to
    /// `$HOME/.brewdash/device.json`; `:memory:` disables persistence.
    #[serde(default)]
    pub storage: Option<String>,
}

fn default_name() -> String {
    "BrewDash".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.store.name, "BrewDash");
        assert_eq!(config.store.currency, "INR");
        assert!(config.device.storage.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [store]
            currency = "USD"
            "#,
        )
        .unwrap();
        assert_eq!(config.store.name, "BrewDash");
        assert_eq!(config.store.currency, "USD");
    }
}
