//! Settings file loading and saving.
//!
//! Loading reads the file once, parses it into a format-neutral JSON
//! document, migrates it to the current schema and validates the result.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::migrate::migrate_document;
use crate::types::{CURRENT_VERSION, Config};
use crate::validate;

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// File name used under the per-user configuration directory.
pub const DEFAULT_FILE_NAME: &str = "jobswitch.json";

/// On-disk encoding of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// The host's native JSON settings.
    Json,
    /// TOML with the same keys.
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything but `.toml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// A config together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The current-schema settings.
    pub config: Config,
    /// Schema version the file was migrated from, if a migration ran.
    pub migrated_from: Option<u32>,
    /// File the settings were read from; `None` for defaults.
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Whether the file on disk is older than the loaded schema and should
    /// be rewritten.
    #[must_use]
    pub fn needs_save(&self) -> bool {
        self.migrated_from.is_some()
    }
}

/// Parse settings text in the given format and migrate it.
///
/// `label` names the input in error messages.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the text is malformed, declares an
/// unsupported version, or fails validation.
pub fn parse_str(content: &str, format: ConfigFormat, label: &str) -> ConfigResult<(Config, Option<u32>)> {
    let parse_error = |message: String| ConfigError::ParseError {
        path: label.to_owned(),
        message,
    };

    let document: serde_json::Value = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Toml => {
            let value: toml::Value =
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
            serde_json::to_value(value).map_err(|e| parse_error(e.to_string()))?
        },
    };

    let (config, from) = migrate_document(document, label)?;
    validate::validate(&config)?;
    Ok((config, from))
}

/// Load a settings file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed, is too
/// large, or fails migration or validation.
pub fn load_file(path: &Path) -> ConfigResult<LoadedConfig> {
    match try_load_file(path)? {
        Some(loaded) => Ok(loaded),
        None => Err(ConfigError::ReadError {
            path: path.display().to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }),
    }
}

/// Load a settings file, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns a [`ConfigError`] if an existing file is invalid.
pub fn load_or_default(path: &Path) -> ConfigResult<LoadedConfig> {
    if let Some(loaded) = try_load_file(path)? {
        return Ok(loaded);
    }
    debug!(path = %path.display(), "config file not found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
        migrated_from: None,
        path: None,
    })
}

/// Try to load a file, returning `None` if the file doesn't exist.
///
/// Uses a single read operation to avoid TOCTOU races (no separate
/// exists/metadata checks before reading).
fn try_load_file(path: &Path) -> ConfigResult<Option<LoadedConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {} byte limit",
                content.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        });
    }

    let label = path.display().to_string();
    let (config, migrated_from) = parse_str(&content, ConfigFormat::from_path(path), &label)?;
    info!(path = %label, "loaded config");

    Ok(Some(LoadedConfig {
        config,
        migrated_from,
        path: Some(path.to_path_buf()),
    }))
}

/// Serialize settings in the given format at the current schema version.
///
/// # Errors
///
/// Returns a [`ConfigError`] if validation or serialization fails.
pub fn to_string(config: &Config, format: ConfigFormat) -> ConfigResult<String> {
    let mut config = config.clone();
    config.version = CURRENT_VERSION;
    validate::validate(&config)?;

    match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&config)
            .map_err(|e| ConfigError::SerializeError(e.to_string())),
        ConfigFormat::Toml => {
            toml::to_string_pretty(&config).map_err(|e| ConfigError::SerializeError(e.to_string()))
        },
    }
}

/// Write settings to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns a [`ConfigError`] if validation, serialization or the write
/// fails.
pub fn save_file(path: &Path, config: &Config) -> ConfigResult<()> {
    let content = to_string(config, ConfigFormat::from_path(path))?;
    let write_error = |source| ConfigError::WriteError {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, content).map_err(write_error)?;
    info!(path = %path.display(), "saved config");
    Ok(())
}

/// Default settings path under the per-user configuration directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if the platform has no such
/// directory for the current user.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    directories::ProjectDirs::from("", "", "jobswitch")
        .map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}
