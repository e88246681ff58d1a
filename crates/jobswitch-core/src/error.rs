//! Error types for catalog loading, resolution and host actions.

use thiserror::Error;

use crate::catalog::CatalogKind;
use crate::gateway::GatewayError;

/// Errors produced while resolving a command or acting on its target.
///
/// The `Display` text of every variant is suitable for the user-visible
/// chat channel.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The catalog for a category failed to load or is disabled.
    #[error("{kind} data is unavailable")]
    DataUnavailable {
        /// Category whose data is missing.
        kind: CatalogKind,
    },

    /// A catalog source was present but could not be read or parsed.
    #[error("failed to load {kind} catalog from {path}: {message}")]
    CatalogSource {
        /// Category being loaded.
        kind: CatalogKind,
        /// Location of the data.
        path: String,
        /// Underlying failure.
        message: String,
    },

    /// A valid input matched no catalog entry.
    #[error("No {kind} found matching: {query}")]
    NotFound {
        /// Category that was searched.
        kind: CatalogKind,
        /// The input as the user typed it.
        query: String,
    },

    /// The input was empty or otherwise unusable.
    #[error("{0}")]
    InvalidInput(String),

    /// No stored loadout exists for the resolved job.
    #[error("No gearset found for class job: {job}")]
    NoLoadout {
        /// Display name of the job.
        job: String,
    },

    /// The host is not in a state that allows the action.
    #[error("{0}")]
    PreconditionFailed(String),

    /// The host action itself failed.
    #[error("Failed to {action}: {source}")]
    ExternalCall {
        /// What was being attempted, e.g. `"switch Phantom Job"`.
        action: &'static str,
        /// Error reported by the gateway.
        #[source]
        source: GatewayError,
    },
}

/// Result type for jobswitch operations.
pub type SwitchResult<T> = Result<T, SwitchError>;
