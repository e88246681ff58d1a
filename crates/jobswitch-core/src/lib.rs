//! Jobswitch Core - catalog model and command resolution engine.
//!
//! This crate provides:
//! - The [`Catalog`] of switchable targets (classes/jobs and phantom jobs)
//! - Catalog sources (in-memory and file backed)
//! - The exact acronym resolver used by class/job commands
//! - The two-tier fuzzy resolver used by the phantom-job search command
//! - Best-loadout selection over the host's gearset table
//! - The host seams: [`ActionGateway`], the only way to act on the game,
//!   plus the [`CommandSink`] command table and the [`Notifier`] chat channel
//!
//! # Example
//!
//! ```
//! use jobswitch_core::{Affixes, Catalog, CatalogEntry, CatalogKind, EntryId, resolve_exact};
//!
//! let catalog = Catalog::new(
//!     CatalogKind::ClassJob,
//!     vec![CatalogEntry::new(EntryId(19), "paladin").with_acronym("PLD")],
//! );
//!
//! let entry = resolve_exact(&catalog, &Affixes::default(), "/pld").unwrap();
//! assert_eq!(entry.id, EntryId(19));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod catalog;
mod error;
mod gateway;
mod host;
mod loadout;
mod resolve;
mod source;

pub use catalog::{Catalog, CatalogEntry, CatalogKind, EntryId};
pub use error::{SwitchError, SwitchResult};
pub use gateway::{ActionGateway, GatewayError, GatewayResult, ZoneUse};
pub use host::{CommandInfo, CommandSink, HostError, Notifier};
pub use loadout::{LOADOUT_SLOT_COUNT, LoadoutSlot, best_loadout, equip_best_loadout};
pub use resolve::{
    ALT_NAME_PREFIX, Affixes, COMMAND_MARKER, FuzzyMatch, MatchTier, character_match_score,
    resolve_exact, resolve_fuzzy, strip_marker,
};
pub use source::{CatalogSource, FileCatalogSource, StaticCatalogSource, load_catalog};
