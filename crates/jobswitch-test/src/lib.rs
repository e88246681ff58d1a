//! Jobswitch Test - shared test utilities for jobswitch.
//!
//! Mock host collaborators and catalog fixtures used across the
//! workspace as a dev-dependency.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! jobswitch-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use jobswitch_core::{ZoneUse, equip_best_loadout};
//! use jobswitch_test::{MockGateway, fixtures};
//!
//! let gateway = MockGateway::new()
//!     .with_zone(ZoneUse::OCCULT_CRESCENT)
//!     .with_slots(vec![fixtures::slot(0, fixtures::PALADIN, 710)]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod mocks;

pub use mocks::*;
