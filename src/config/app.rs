//! Application settings loaded from `config.toml`.
//!
//! Every field has a default, so the file is optional: a missing file yields
//! [`AppConfig::default`], while a file that exists but cannot be parsed is an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the `SQLite` ledger, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://finance_buddy.sqlite?mode=rwc";

/// Settings shared by the store and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection string for the ledger
    pub database_url: String,
    /// Prefix printed before formatted amounts
    pub currency_symbol: String,
    /// Width in characters of the longest bar in text charts
    pub chart_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            currency_symbol: "R$".to_string(),
            chart_width: 40,
        }
    }
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

fn parse_config(contents: &str) -> std::result::Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads settings from `path` if it exists, falling back to defaults otherwise.
/// A `database_url` passed in (from the CLI flag or `DATABASE_URL`) overrides the file.
///
/// # Errors
/// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
pub fn load_app_configuration<P: AsRef<Path>>(
    path: P,
    database_url: Option<String>,
) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    let mut config = if path_ref.exists() {
        load_config(path_ref)?
    } else {
        info!("No config file at {:?}, using defaults", path_ref);
        AppConfig::default()
    };

    if let Some(url) = database_url {
        debug!("Database URL overridden from command line or environment");
        config.database_url = url;
    }

    Ok(config)
}
