//! Configuration schema with serde defaults.
//!
//! Every section uses `#[serde(default)]` so a partial (or absent) config
//! file works out of the box.

use serde::{Deserialize, Serialize};

/// Backend origin baked into release builds. The config file and the
/// `--url` flag can override it for development.
pub const DEFAULT_ORIGIN: &str = "https://github-explorer.replit.app";

/// Product token appended to the WebView user agent string.
pub const PRODUCT_TOKEN: &str = "GitHubExplorer/1.0";

/// Remote backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Fully-qualified origin the shell renders, e.g. `https://app.example.com`.
    pub origin: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// Shell window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 320-7680).
    pub width: f64,
    /// Logical height (valid range: 240-4320).
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "GitHub Explorer".to_string(),
            width: 480.0,
            height: 800.0,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` env-filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "explorer=info".to_string(),
        }
    }
}

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub backend: BackendConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
