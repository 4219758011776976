//! Config file IO: locate, read, and seed the TOML config file.
//!
//! This layer only reads and deserializes; range checks happen exactly once,
//! in the crate-level `load_config*` entry points, so a file either yields a
//! fully valid config or a single hard error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use explorer_common::ConfigError;
use tracing::info;

use crate::schema::ExplorerConfig;

/// Platform config file location: `<config dir>/explorer/config.toml`
/// (`~/.config` on Linux, `~/Library/Application Support` on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))?;
    Ok(base.join("explorer").join("config.toml"))
}

/// Read and deserialize one TOML file. Fields missing from the file take
/// their serde defaults.
pub fn read_config(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    info!(path = %path.display(), "config file loaded");
    Ok(config)
}

/// Read from the default location, seeding a commented template on first
/// run. The template is all comments, so it parses to pure defaults.
pub fn read_or_seed_default() -> Result<ExplorerConfig, ConfigError> {
    let path = default_config_path()?;
    match read_config(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            seed_default_config(&path)?;
            info!(path = %path.display(), "seeded default config file");
            Ok(ExplorerConfig::default())
        }
        other => other,
    }
}

fn seed_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })
}

const DEFAULT_TEMPLATE: &str = r##"# GitHub Explorer Shell Configuration
# Only override what you want to change -- missing fields use defaults.

[backend]
# origin = "https://github-explorer.replit.app"

[window]
# title = "GitHub Explorer"
# width = 480    # 320-7680
# height = 800   # 240-4320

[logging]
# filter = "explorer=info"
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DEFAULT_ORIGIN;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("explorer-config-test-{name}.toml"));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = read_config(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p.ends_with("config.toml")));
    }

    #[test]
    fn file_overrides_are_applied() {
        let path = write_temp(
            "overrides",
            r#"
            [backend]
            origin = "https://staging.example.com"
            [window]
            width = 1024
            "#,
        );
        let config = read_config(&path).unwrap();
        assert_eq!(config.backend.origin, "https://staging.example.com");
        assert!((config.window.width - 1024.0).abs() < f64::EPSILON);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let path = write_temp("invalid", "[backend\norigin = ");
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn reading_does_not_range_check() {
        // Out-of-range values deserialize fine here; load_config_from is
        // the single place that rejects them.
        let path = write_temp("range", "[window]\nwidth = 10.0\n");
        let parsed = read_config(&path).unwrap();
        assert!((parsed.window.width - 10.0).abs() < f64::EPSILON);

        let err = crate::load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let config: ExplorerConfig = toml::from_str(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(config.backend.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn default_config_path_ends_with_explorer_toml() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("explorer/config.toml"));
    }
}
