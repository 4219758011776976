//! Shell configuration.
//!
//! TOML-based configuration with serde defaults and validation. The backend
//! origin, window geometry, and log filter are all overridable; release
//! builds fall back to the built-in defaults when no file exists.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ExplorerConfig, DEFAULT_ORIGIN, PRODUCT_TOKEN};

use explorer_common::ConfigError;

/// Load config from the platform default path, validating the result.
pub fn load_config() -> Result<ExplorerConfig, ConfigError> {
    let config = toml_loader::read_or_seed_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path, validating the result.
pub fn load_config_from(path: &std::path::Path) -> Result<ExplorerConfig, ConfigError> {
    let config = toml_loader::read_config(path)?;
    validation::validate(&config)?;
    Ok(config)
}
