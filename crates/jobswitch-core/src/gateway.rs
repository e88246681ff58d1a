//! The action gateway: the single seam through which the engine reads host
//! state and triggers in-game actions.
//!
//! Implementations are adapters over the host process. They own any buffers
//! or agent handles an action needs; callers never see them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::EntryId;
use crate::loadout::LoadoutSlot;

/// Errors raised by a gateway implementation.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The host object needed for the action could not be obtained.
    #[error("host agent unavailable: {0}")]
    AgentUnavailable(String),

    /// The host refused or failed the action.
    #[error("host rejected the request: {0}")]
    Rejected(String),
}

/// Result type for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// The host-reported "intended use" of the current territory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneUse(pub u16);

impl ZoneUse {
    /// The field operation in which phantom jobs can be changed.
    pub const OCCULT_CRESCENT: Self = Self(61);
}

impl fmt::Display for ZoneUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access to host state and actions.
pub trait ActionGateway: Send + Sync {
    /// Read one row of the gearset table, `None` if the host has no row at
    /// that position.
    fn loadout_slot(&self, index: u8) -> Option<LoadoutSlot>;

    /// Equip the gearset stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the host fails to equip the gearset.
    fn equip_loadout(&self, index: u8) -> GatewayResult<()>;

    /// The intended use of the territory the player is in.
    fn current_zone(&self) -> ZoneUse;

    /// Ask the host to switch to the catalog entry `id` (phantom jobs).
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the host agent is missing or the event
    /// call fails.
    fn select_catalog_entry(&self, id: EntryId) -> GatewayResult<()>;
}
