#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Settings for the jobswitch plugin.
//!
//! This crate provides a single current [`Config`] schema, the frozen
//! schemas of every earlier version, and pure migration functions between
//! them. Files are migrated once, at load time.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jobswitch_config::Config;
//!
//! let loaded = Config::load_or_default(std::path::Path::new("jobswitch.json")).unwrap();
//! if let Some(version) = loaded.migrated_from {
//!     println!("migrated settings from version {version}");
//! }
//! println!("class/job commands: {}", loaded.config.register_class_jobs);
//! ```
//!
//! # File formats
//!
//! JSON is the host's native settings format and the default. Files ending
//! in `.toml` are read and written as TOML. Both use the same `PascalCase`
//! keys and the same `Version` field.
//!
//! # Design
//!
//! This crate has **no dependencies on other internal jobswitch crates**.
//! Conversion to plugin settings happens in the plugin's config bridge.

/// Configuration error types.
pub mod error;
/// File loading and saving.
pub mod loader;
/// Conversions from earlier schema versions.
pub mod migrate;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigFormat, LoadedConfig};
pub use types::*;

impl Config {
    /// Load and migrate a settings file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed,
    /// migrated or validated.
    pub fn load(path: &std::path::Path) -> ConfigResult<LoadedConfig> {
        loader::load_file(path)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an existing file is invalid.
    pub fn load_or_default(path: &std::path::Path) -> ConfigResult<LoadedConfig> {
        loader::load_or_default(path)
    }

    /// Write the settings to `path` at the current schema version.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if validation or the write fails.
    pub fn save(&self, path: &std::path::Path) -> ConfigResult<()> {
        loader::save_file(path, self)
    }
}
