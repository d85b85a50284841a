//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    Settings,
};

/// Reads and validates settings from a JSON file.
///
/// Missing fields fall back to their defaults.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_from_file(path: &Path) -> Result<Settings, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    tracing::debug!("Settings loaded successfully: {:?}", settings);
    Ok(settings)
}
