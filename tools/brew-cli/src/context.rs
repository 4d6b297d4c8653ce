//! CLI execution context.

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use brew_app::{BrewApp, BrewConfig};
use brew_commerce::money::Currency;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// The application (catalog, stores, notifications).
    pub app: BrewApp,
}

impl Context {
    /// Load config, build the application context.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config().unwrap_or_default()
        };

        let Some(currency) = Currency::from_code(&config.store.currency) else {
            bail!("Unknown currency code '{}'", config.store.currency);
        };

        let mut brew_config = BrewConfig::new(config.store.name.clone()).with_currency(currency);
        match Self::storage_path(&config)? {
            Some(path) => {
                output.debug(&format!("Device storage: {}", path.display()));
                brew_config = brew_config.with_storage_path(path);
            }
            None => output.debug("Device storage: in-memory"),
        }

        let app = BrewApp::new(brew_config).context("Failed to open device storage")?;
        Ok(Self {
            config,
            output,
            app,
        })
    }

    /// Find a config file in the working directory or its ancestors.
    fn find_config() -> Option<CliConfig> {
        let config_names = ["brewdash.toml", ".brewdash.toml"];

        let mut current = std::env::current_dir().ok()?;
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve the device storage file, creating its directory.
    ///
    /// Returns `None` for the `:memory:` sentinel.
    fn storage_path(config: &CliConfig) -> Result<Option<PathBuf>> {
        let path = match &config.device.storage {
            Some(s) if s == ":memory:" => return Ok(None),
            Some(s) => PathBuf::from(s),
            None => {
                let home = std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                home.join(".brewdash").join("device.json")
            }
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        Ok(Some(path))
    }
}
