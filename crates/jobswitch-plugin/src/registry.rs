//! Command registry.
//!
//! Derives the chat commands implied by the loaded catalogs and the
//! current settings, adds them to the host, and remembers exactly which
//! ones it added so they can be removed again.

use std::collections::BTreeMap;
use std::sync::Arc;

use jobswitch_core::{COMMAND_MARKER, Catalog, CatalogKind, CommandInfo, CommandSink, EntryId};
use tracing::{debug, info, warn};

use crate::settings::SwitcherSettings;

/// Name of the phantom-job search command, without the marker.
pub const PHANTOM_SEARCH_COMMAND: &str = "pj";

/// What a registered command switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    /// One class/job, equipped through its best gearset.
    ClassJob(EntryId),
    /// The phantom-job fuzzy search.
    PhantomSearch,
}

/// A single command the registry wants the host to route to the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistration {
    /// Full command string including the marker (e.g. `/PLD`).
    pub command: String,
    /// What the command switches to.
    pub target: CommandTarget,
    /// Help line shown by the host.
    pub help: String,
}

impl CommandRegistration {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            help_message: self.help.clone(),
            show_in_help: false,
        }
    }
}

/// Spell `command` in each enabled casing, upper first, without repeats.
fn spellings(settings: &SwitcherSettings, command: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(2);
    if settings.uppercase {
        out.push(command.to_uppercase());
    }
    if settings.lowercase {
        let lower = command.to_lowercase();
        if !out.contains(&lower) {
            out.push(lower);
        }
    }
    out
}

/// Compute every command implied by `settings` and the loaded catalogs.
///
/// A disabled category, or one whose catalog is `None`, contributes
/// nothing. Rows with id 0, a blank name or a blank acronym are skipped.
/// The result is in catalog order and holds no duplicate command strings;
/// a later entry that spells an existing command is skipped with a warning.
#[must_use]
pub fn derive_registrations(
    settings: &SwitcherSettings,
    class_jobs: Option<&Catalog>,
    phantom_jobs: Option<&Catalog>,
) -> Vec<CommandRegistration> {
    let mut out: Vec<CommandRegistration> = Vec::new();
    let mut push = |registration: CommandRegistration| {
        if out.iter().any(|r| r.command == registration.command) {
            warn!(command = %registration.command, "Command already exists");
            return;
        }
        out.push(registration);
    };

    if settings.class_jobs {
        match class_jobs {
            Some(catalog) => {
                for entry in catalog.iter().filter(|e| e.is_registrable()) {
                    let Some(acronym) = entry.acronym() else {
                        continue;
                    };
                    let help = format!("Switches to {} {}", entry.name, CatalogKind::ClassJob);
                    for command in spellings(settings, &settings.affixes.apply(acronym)) {
                        push(CommandRegistration {
                            command,
                            target: CommandTarget::ClassJob(entry.id),
                            help: help.clone(),
                        });
                    }
                }
            },
            None => warn!(kind = %CatalogKind::ClassJob, "No data, skipping command registration"),
        }
    }

    if settings.phantom_jobs {
        match phantom_jobs {
            Some(_) => {
                let base = format!("{COMMAND_MARKER}{PHANTOM_SEARCH_COMMAND}");
                for command in spellings(settings, &base) {
                    push(CommandRegistration {
                        command,
                        target: CommandTarget::PhantomSearch,
                        help: format!(
                            "Switches {} by fuzzy search (e.g., {base} knight)",
                            CatalogKind::PhantomJob
                        ),
                    });
                }
            },
            None => warn!(kind = %CatalogKind::PhantomJob, "No data, skipping command registration"),
        }
    }

    out
}

/// Tracks the commands this plugin owns in the host.
pub struct CommandRegistry {
    sink: Arc<dyn CommandSink>,
    registered: BTreeMap<String, CommandRegistration>,
}

impl CommandRegistry {
    /// Create an empty registry bound to the host's command table.
    #[must_use]
    pub fn new(sink: Arc<dyn CommandSink>) -> Self {
        Self {
            sink,
            registered: BTreeMap::new(),
        }
    }

    /// Add every derived command to the host.
    ///
    /// A command the host already holds for someone else is skipped with
    /// a warning and is not tracked. Commands already owned by this
    /// registry are left alone. Returns the number of commands added.
    pub fn register(
        &mut self,
        settings: &SwitcherSettings,
        class_jobs: Option<&Catalog>,
        phantom_jobs: Option<&Catalog>,
    ) -> usize {
        let mut added: usize = 0;
        for registration in derive_registrations(settings, class_jobs, phantom_jobs) {
            if self.registered.contains_key(&registration.command) {
                continue;
            }
            if self.sink.contains(&registration.command) {
                warn!(command = %registration.command, "Command already exists");
                continue;
            }
            if let Err(e) = self
                .sink
                .add_handler(&registration.command, registration.info())
            {
                warn!(command = %registration.command, error = %e, "Failed to register command");
                continue;
            }
            debug!(command = %registration.command, help = %registration.help, "Registered command");
            self.registered
                .insert(registration.command.clone(), registration);
            added = added.saturating_add(1);
        }
        info!(added, total = self.registered.len(), "Registered commands");
        added
    }

    /// Remove every command this registry added and forget them.
    ///
    /// Commands the host no longer holds are skipped. Calling this twice
    /// is harmless. Returns the number of commands removed.
    pub fn unregister(&mut self) -> usize {
        let mut removed: usize = 0;
        for command in std::mem::take(&mut self.registered).into_keys() {
            if self.sink.contains(&command) && self.sink.remove_handler(&command) {
                debug!(command = %command, "Unregistered command");
                removed = removed.saturating_add(1);
            }
        }
        if removed > 0 {
            info!(removed, "Unregistered commands");
        }
        removed
    }

    /// Whether this registry added `command`.
    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        self.registered.contains_key(command)
    }

    /// Look up the registration for `command`.
    #[must_use]
    pub fn get(&self, command: &str) -> Option<&CommandRegistration> {
        self.registered.get(command)
    }

    /// Registered commands, sorted by command string.
    pub fn registrations(&self) -> impl Iterator<Item = &CommandRegistration> {
        self.registered.values()
    }

    /// Number of commands owned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether no commands are owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("registered", &self.registered.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
