//! Jobswitch Plugin - the host-facing half of jobswitch.
//!
//! This crate provides:
//! - [`HostServices`], the bundle of host seams the plugin is given
//! - The [`CommandRegistry`] that keeps the host's command table in step
//!   with the settings
//! - The [`JobSwitcher`] command handler
//! - [`SwitcherSettings`], bridged from the persisted config
//!
//! # Example
//!
//! ```rust,ignore
//! use jobswitch_plugin::{HostServices, JobSwitcher, SwitcherSettings};
//!
//! let services = HostServices::new(commands, notifier, gateway);
//! let switcher = JobSwitcher::new(SwitcherSettings::from(&config), services, &source);
//!
//! // routed by the host for every registered command
//! switcher.on_command("/pld", "");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod host;
mod registry;
mod settings;
mod switcher;

pub use host::HostServices;
pub use jobswitch_core::{CommandInfo, CommandSink, HostError, Notifier};
pub use registry::{
    CommandRegistration, CommandRegistry, CommandTarget, PHANTOM_SEARCH_COMMAND,
    derive_registrations,
};
pub use settings::SwitcherSettings;
pub use switcher::{CHAT_PREFIX, JobSwitcher, Switched};
