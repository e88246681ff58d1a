use thiserror::Error;

/// Errors raised while loading, migrating or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// File path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be written.
    #[error("failed to write config file {path}: {source}")]
    WriteError {
        /// File path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON/TOML or does not match its schema.
    #[error("failed to parse config {path}: {message}")]
    ParseError {
        /// File path or a label for in-memory input.
        path: String,
        /// Parser message.
        message: String,
    },

    /// Settings could not be serialized.
    #[error("failed to serialize config: {0}")]
    SerializeError(String),

    /// The file was written by a newer release.
    #[error("unsupported config version {version} in {path} (newest known is {newest})")]
    UnsupportedVersion {
        /// File path.
        path: String,
        /// Version found in the file.
        version: u64,
        /// Newest version this build understands.
        newest: u32,
    },

    /// A value is out of range.
    #[error("invalid config value for {field}: {message}")]
    ValidationError {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// No per-user configuration directory could be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
