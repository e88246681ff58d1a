//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod dispatch;
pub(crate) mod list;
pub(crate) mod resolve;
pub(crate) mod search;
