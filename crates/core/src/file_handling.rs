//! Reading the settings file.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Reads and validates settings from disk.
///
/// A missing or empty file yields [`Settings::default`]. Keys absent from the
/// file keep their defaults.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown enum values
/// - The resulting settings fail [`Settings::validate`]
///
/// # Examples
///
/// ```no_run
/// use switchback_core::file_handling::get_settings;
///
/// let settings = get_settings("/home/me/.switchback/settings.yml")?;
/// println!("Prompt: {}", settings.prompt);
/// # Ok::<(), switchback_core::error::Error>(())
/// ```
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        info!("No settings file at `{settings_path}`, using defaults");
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(settings_path)
        .map_err(|e| Error::io_error("settings".to_string(), settings_path.to_string(), e))?;

    if contents.trim().is_empty() {
        debug!("Settings file `{settings_path}` is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    settings.validate()?;

    debug!("Loaded settings from `{settings_path}`: {settings:?}");

    Ok(settings)
}
