//! The capability bundle handed over by the host at load time.
//!
//! Nothing in this crate reaches for a global accessor.

use std::sync::Arc;

use jobswitch_core::{ActionGateway, CommandSink, Notifier};

/// Everything the plugin may touch in the host.
#[derive(Clone)]
pub struct HostServices {
    /// Chat-command table.
    pub commands: Arc<dyn CommandSink>,
    /// User-visible chat output.
    pub notifier: Arc<dyn Notifier>,
    /// Game state and actions.
    pub gateway: Arc<dyn ActionGateway>,
}

impl HostServices {
    /// Bundle the host capabilities.
    #[must_use]
    pub fn new(
        commands: Arc<dyn CommandSink>,
        notifier: Arc<dyn Notifier>,
        gateway: Arc<dyn ActionGateway>,
    ) -> Self {
        Self {
            commands,
            notifier,
            gateway,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
