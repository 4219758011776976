//! Config validation: ranges and the backend origin shape.

use explorer_common::ConfigError;

use crate::schema::ExplorerConfig;

/// Validate a loaded config. Returns the first violation found.
pub fn validate(config: &ExplorerConfig) -> Result<(), ConfigError> {
    validate_origin(&config.backend.origin)?;
    validate_window(config)?;
    Ok(())
}

fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    if origin.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "backend.origin must not be empty".into(),
        ));
    }
    if !origin.starts_with("https://") && !origin.starts_with("http://") {
        return Err(ConfigError::ValidationError(format!(
            "backend.origin must be an http(s) URL, got '{origin}'"
        )));
    }
    if origin.contains(char::is_whitespace) {
        return Err(ConfigError::ValidationError(format!(
            "backend.origin must not contain whitespace, got '{origin}'"
        )));
    }
    Ok(())
}

fn validate_window(config: &ExplorerConfig) -> Result<(), ConfigError> {
    let window = &config.window;
    if !(320.0..=7680.0).contains(&window.width) {
        return Err(ConfigError::ValidationError(format!(
            "window.width {} out of range 320-7680",
            window.width
        )));
    }
    if !(240.0..=4320.0).contains(&window.height) {
        return Err(ConfigError::ValidationError(format!(
            "window.height {} out of range 240-4320",
            window.height
        )));
    }
    Ok(())
}
