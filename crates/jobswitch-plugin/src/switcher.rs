//! The chat-command handler.

use jobswitch_core::{
    Catalog, CatalogEntry, CatalogKind, CatalogSource, LoadoutSlot, MatchTier, SwitchError,
    SwitchResult, ZoneUse, equip_best_loadout, load_catalog, resolve_exact, resolve_fuzzy,
    strip_marker,
};
use tracing::{debug, error, info};

use crate::host::HostServices;
use crate::registry::{CommandRegistry, PHANTOM_SEARCH_COMMAND};
use crate::settings::SwitcherSettings;

/// Prefix of every line printed to chat.
pub const CHAT_PREFIX: &str = "JobSwitch: ";

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Switched {
    /// A class/job gearset was equipped.
    ClassJob {
        /// The resolved class/job.
        entry: CatalogEntry,
        /// The gearset that was equipped.
        slot: LoadoutSlot,
    },
    /// A phantom job was selected.
    PhantomJob {
        /// The resolved phantom job.
        entry: CatalogEntry,
        /// Tier that produced the match.
        tier: MatchTier,
        /// Score within that tier.
        score: usize,
    },
}

impl Switched {
    /// Chat line confirming the switch.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ClassJob { entry, slot } => format!(
                "{CHAT_PREFIX}Switched to {} (gearset {})",
                entry.name,
                slot.index.saturating_add(1)
            ),
            Self::PhantomJob { entry, .. } => format!(
                "{CHAT_PREFIX}Switched Phantom Job to {}",
                entry.name_alt().unwrap_or(&entry.name)
            ),
        }
    }
}

/// Owns the catalogs and the registry, and handles routed commands.
///
/// Dropping the switcher removes every command it registered.
#[derive(Debug)]
pub struct JobSwitcher {
    settings: SwitcherSettings,
    class_jobs: Option<Catalog>,
    phantom_jobs: Option<Catalog>,
    registry: CommandRegistry,
    services: HostServices,
}

impl JobSwitcher {
    /// Load both catalogs from `source` and register the configured
    /// commands.
    pub fn new(
        settings: SwitcherSettings,
        services: HostServices,
        source: &dyn CatalogSource,
    ) -> Self {
        let mut switcher = Self {
            settings,
            class_jobs: load_catalog(source, CatalogKind::ClassJob),
            phantom_jobs: load_catalog(source, CatalogKind::PhantomJob),
            registry: CommandRegistry::new(services.commands.clone()),
            services,
        };
        switcher.register();
        switcher
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &SwitcherSettings {
        &self.settings
    }

    /// Commands currently owned in the host.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The loaded class/job catalog, if any.
    #[must_use]
    pub fn class_jobs(&self) -> Option<&Catalog> {
        self.class_jobs.as_ref()
    }

    /// The loaded phantom-job catalog, if any.
    #[must_use]
    pub fn phantom_jobs(&self) -> Option<&Catalog> {
        self.phantom_jobs.as_ref()
    }

    fn register(&mut self) -> usize {
        self.registry.register(
            &self.settings,
            self.class_jobs.as_ref(),
            self.phantom_jobs.as_ref(),
        )
    }

    /// Replace the settings and rebuild the host command set.
    pub fn apply_settings(&mut self, settings: SwitcherSettings) {
        self.registry.unregister();
        self.settings = settings;
        self.register();
    }

    /// Reload both catalogs from `source` and rebuild the host command set.
    pub fn reload_catalogs(&mut self, source: &dyn CatalogSource) {
        self.registry.unregister();
        self.class_jobs = load_catalog(source, CatalogKind::ClassJob);
        self.phantom_jobs = load_catalog(source, CatalogKind::PhantomJob);
        self.register();
    }

    /// Remove every registered command from the host.
    pub fn unregister(&mut self) -> usize {
        self.registry.unregister()
    }

    /// Entry point for a command routed by the host.
    ///
    /// A blank command is ignored. Any failure is logged and printed to
    /// the user as an error line, and `None` is returned.
    pub fn on_command(&self, command: &str, arguments: &str) -> Option<Switched> {
        if command.trim().is_empty() {
            debug!("Ignoring blank command");
            return None;
        }
        match self.dispatch(command, arguments) {
            Ok(switched) => {
                self.services.notifier.print(&switched.message());
                Some(switched)
            },
            Err(e) => {
                self.report(command, &e);
                None
            },
        }
    }

    /// Run a command and return its outcome without reporting failures.
    ///
    /// # Errors
    ///
    /// Returns the [`SwitchError`] describing why the switch did not
    /// happen.
    pub fn dispatch(&self, command: &str, arguments: &str) -> SwitchResult<Switched> {
        let token = strip_marker(command.trim());
        if token.is_empty() {
            return Err(SwitchError::InvalidInput("Empty command".to_owned()));
        }

        if token.eq_ignore_ascii_case(PHANTOM_SEARCH_COMMAND) {
            let catalog = self
                .phantom_jobs
                .as_ref()
                .ok_or(SwitchError::DataUnavailable {
                    kind: CatalogKind::PhantomJob,
                })?;
            return self.switch_phantom_job(catalog, arguments);
        }

        let catalog = self
            .class_jobs
            .as_ref()
            .ok_or(SwitchError::DataUnavailable {
                kind: CatalogKind::ClassJob,
            })?;
        self.switch_class_job(catalog, token)
    }

    fn switch_class_job(&self, catalog: &Catalog, token: &str) -> SwitchResult<Switched> {
        let entry = resolve_exact(catalog, &self.settings.affixes, token)?;
        let slot = equip_best_loadout(self.services.gateway.as_ref(), entry)?;
        Ok(Switched::ClassJob {
            entry: entry.clone(),
            slot,
        })
    }

    fn switch_phantom_job(&self, catalog: &Catalog, query: &str) -> SwitchResult<Switched> {
        let found = resolve_fuzzy(catalog, query)?;

        let zone = self.services.gateway.current_zone();
        if zone != ZoneUse::OCCULT_CRESCENT {
            debug!(zone = %zone, "Phantom job switch outside the Occult Crescent");
            return Err(SwitchError::PreconditionFailed(
                "You can only use this command while in the Occult Crescent".to_owned(),
            ));
        }

        self.services
            .gateway
            .select_catalog_entry(found.entry.id)
            .map_err(|source| SwitchError::ExternalCall {
                action: "switch Phantom Job",
                source,
            })?;

        let name = found.entry.name_alt().unwrap_or(&found.entry.name);
        info!(
            job = %name,
            id = %found.entry.id,
            tier = %found.tier,
            score = found.score,
            "Switched Phantom Job"
        );
        Ok(Switched::PhantomJob {
            entry: found.entry.clone(),
            tier: found.tier,
            score: found.score,
        })
    }

    fn report(&self, command: &str, err: &SwitchError) {
        error!(command = %command, error = %err, "Job switch failed");
        self.services
            .notifier
            .print_error(&format!("{CHAT_PREFIX}{err}"));
    }
}

impl Drop for JobSwitcher {
    fn drop(&mut self) {
        self.registry.unregister();
    }
}
