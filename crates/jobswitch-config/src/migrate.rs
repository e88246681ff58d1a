//! Schema migration.
//!
//! Each `migrate_v*` function is pure and converts one frozen schema
//! straight to the current [`Config`]; there is no chain of intermediate
//! steps to keep in sync.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{CURRENT_VERSION, Config, ConfigV0, ConfigV1};

/// Key holding the schema version in every settings document.
pub const VERSION_KEY: &str = "Version";

/// Convert version 0 settings.
///
/// Class/job commands stay enabled if either casing was. Phantom jobs did
/// not exist yet and start enabled. Affixes and casing toggles carry over.
#[must_use]
pub fn migrate_v0(old: ConfigV0) -> Config {
    Config {
        version: CURRENT_VERSION,
        is_visible: old.is_visible,
        register_class_jobs: old.register_lowercase_commands || old.register_uppercase_commands,
        register_phantom_jobs: true,
        register_lowercase_commands: old.register_lowercase_commands,
        register_uppercase_commands: old.register_uppercase_commands,
        prefix: old.prefix,
        suffix: old.suffix,
    }
}

/// Convert version 1 settings. Casing and affixes take their defaults.
#[must_use]
pub fn migrate_v1(old: ConfigV1) -> Config {
    Config {
        is_visible: old.is_visible,
        register_class_jobs: old.register_class_jobs,
        register_phantom_jobs: old.register_phantom_jobs,
        ..Config::default()
    }
}

fn parse<T: DeserializeOwned>(value: Value, path: &str) -> ConfigResult<T> {
    serde_json::from_value(value).map_err(|e| ConfigError::ParseError {
        path: path.to_owned(),
        message: e.to_string(),
    })
}

/// Bring a parsed settings document to the current schema.
///
/// Returns the config and, if a migration ran, the version it started
/// from. A document without a version key is read as the current schema.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the document does not match its
/// declared schema and [`ConfigError::UnsupportedVersion`] for versions
/// newer than [`CURRENT_VERSION`].
pub fn migrate_document(document: Value, path: &str) -> ConfigResult<(Config, Option<u32>)> {
    let version = match document.get(VERSION_KEY) {
        None => None,
        Some(v) => Some(v.as_u64().ok_or_else(|| ConfigError::ParseError {
            path: path.to_owned(),
            message: format!("{VERSION_KEY} must be a non-negative integer, got {v}"),
        })?),
    };

    let (mut config, from) = match version {
        None => (parse::<Config>(document, path)?, None),
        Some(0) => (migrate_v0(parse::<ConfigV0>(document, path)?), Some(0)),
        Some(1) => (migrate_v1(parse::<ConfigV1>(document, path)?), Some(1)),
        Some(v) if v == u64::from(CURRENT_VERSION) => (parse::<Config>(document, path)?, None),
        Some(v) => {
            return Err(ConfigError::UnsupportedVersion {
                path: path.to_owned(),
                version: v,
                newest: CURRENT_VERSION,
            });
        },
    };

    config.version = CURRENT_VERSION;
    if let Some(from) = from {
        info!(
            path,
            from,
            to = CURRENT_VERSION,
            "migrated configuration to current schema"
        );
    }
    Ok((config, from))
}
