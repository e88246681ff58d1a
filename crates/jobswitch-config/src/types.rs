//! Configuration types.
//!
//! [`Config`] is the only schema the rest of the workspace sees. The
//! `ConfigV*` structs are frozen snapshots of what earlier releases wrote
//! to disk; they exist solely as migration inputs and must not change.
//!
//! Field names are serialized in `PascalCase` to match the host's settings
//! files.

use serde::{Deserialize, Serialize};

/// Schema version written by this release.
pub const CURRENT_VERSION: u32 = 2;

// ---------------------------------------------------------------------------
// Current schema
// ---------------------------------------------------------------------------

/// Plugin settings, version [`CURRENT_VERSION`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Schema version. Always [`CURRENT_VERSION`] after loading.
    pub version: u32,
    /// Whether the settings window is open.
    pub is_visible: bool,
    /// Register one command per class/job acronym.
    pub register_class_jobs: bool,
    /// Register the phantom-job search command.
    pub register_phantom_jobs: bool,
    /// Register the lower-case spelling of each command.
    pub register_lowercase_commands: bool,
    /// Register the upper-case spelling of each command.
    pub register_uppercase_commands: bool,
    /// Text inserted between `/` and a class/job acronym.
    pub prefix: String,
    /// Text appended after a class/job acronym.
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            is_visible: true,
            register_class_jobs: true,
            register_phantom_jobs: true,
            register_lowercase_commands: true,
            register_uppercase_commands: true,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Earlier schemas
// ---------------------------------------------------------------------------

/// Version 0 settings: casing toggles and affixes, no category toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfigV0 {
    /// Always `0`.
    pub version: u32,
    /// Whether the settings window is open.
    pub is_visible: bool,
    /// Text inserted between `/` and the acronym.
    pub prefix: String,
    /// Text appended after the acronym.
    pub suffix: String,
    /// Register lower-case commands.
    pub register_lowercase_commands: bool,
    /// Register upper-case commands.
    pub register_uppercase_commands: bool,
}

impl Default for ConfigV0 {
    fn default() -> Self {
        Self {
            version: 0,
            is_visible: true,
            prefix: String::new(),
            suffix: String::new(),
            register_lowercase_commands: true,
            register_uppercase_commands: true,
        }
    }
}

/// Version 1 settings: per-category toggles only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfigV1 {
    /// Always `1`.
    pub version: u32,
    /// Whether the settings window is open.
    pub is_visible: bool,
    /// Register class/job commands.
    pub register_class_jobs: bool,
    /// Register phantom-job commands.
    pub register_phantom_jobs: bool,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            version: 1,
            is_visible: true,
            register_class_jobs: true,
            register_phantom_jobs: true,
        }
    }
}
