//! Mock implementations for testing.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use jobswitch_core::{
    ActionGateway, CommandInfo, CommandSink, EntryId, GatewayError, GatewayResult, HostError,
    LoadoutSlot, Notifier, ZoneUse,
};

/// Mock host command table.
///
/// Commands passed to [`with_preexisting`](Self::with_preexisting) stand
/// in for another plugin's commands.
#[derive(Debug, Clone, Default)]
pub struct MockCommandHost {
    /// Registered commands and their metadata.
    commands: Arc<Mutex<BTreeMap<String, CommandInfo>>>,
    /// Commands `add_handler` refuses.
    rejected: Arc<Mutex<BTreeSet<String>>>,
}

impl MockCommandHost {
    /// Create an empty command table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table that already holds `commands`.
    #[must_use]
    pub fn with_preexisting<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let host = Self::new();
        if let Ok(mut guard) = host.commands.lock() {
            for command in commands {
                guard.insert(
                    command.into(),
                    CommandInfo {
                        help_message: "owned by another plugin".to_string(),
                        show_in_help: true,
                    },
                );
            }
        }
        host
    }

    /// Make `add_handler` fail for `command`.
    #[must_use]
    pub fn rejecting(self, command: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.rejected.lock() {
            guard.insert(command.into());
        }
        self
    }

    /// Whether `command` is registered.
    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        self.commands
            .lock()
            .map(|g| g.contains_key(command))
            .unwrap_or(false)
    }

    /// Registered command strings, sorted.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|g| g.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Metadata of a registered command.
    #[must_use]
    pub fn info(&self, command: &str) -> Option<CommandInfo> {
        self.commands
            .lock()
            .ok()
            .and_then(|g| g.get(command).cloned())
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.lock().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommandSink for MockCommandHost {
    fn contains(&self, command: &str) -> bool {
        MockCommandHost::contains(self, command)
    }

    fn add_handler(&self, command: &str, info: CommandInfo) -> Result<(), HostError> {
        let rejected = self
            .rejected
            .lock()
            .map(|g| g.contains(command))
            .unwrap_or(false);
        if rejected {
            return Err(HostError::CommandRejected {
                command: command.to_string(),
                reason: "rejected by mock".to_string(),
            });
        }
        if let Ok(mut guard) = self.commands.lock() {
            guard.insert(command.to_string(), info);
        }
        Ok(())
    }

    fn remove_handler(&self, command: &str) -> bool {
        self.commands
            .lock()
            .map(|mut g| g.remove(command).is_some())
            .unwrap_or(false)
    }
}

/// Mock chat channel capturing printed lines.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    /// Captured informational lines.
    messages: Arc<Mutex<Vec<String>>>,
    /// Captured error lines.
    errors: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    /// Create a new mock notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get captured informational lines.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Get captured error lines.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl Notifier for MockNotifier {
    fn print(&self, message: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push(message.to_string());
        }
    }

    fn print_error(&self, message: &str) {
        if let Ok(mut guard) = self.errors.lock() {
            guard.push(message.to_string());
        }
    }
}

/// Mock game state and actions.
///
/// Gearset rows are keyed by table position. Every equip and select call
/// is captured, including failed ones.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    /// Gearset table rows by position.
    slots: BTreeMap<u8, LoadoutSlot>,
    /// Reported zone.
    zone: ZoneUse,
    /// Error returned by `equip_loadout`, if any.
    equip_error: Option<String>,
    /// Error returned by `select_catalog_entry`, if any.
    select_error: Option<GatewayError>,
    /// Captured equip calls.
    equipped: Arc<Mutex<Vec<u8>>>,
    /// Captured select calls.
    selected: Arc<Mutex<Vec<EntryId>>>,
}

impl MockGateway {
    /// Create a gateway with an empty gearset table in zone 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place each slot at the position equal to its stored index.
    #[must_use]
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = LoadoutSlot>) -> Self {
        for slot in slots {
            self.slots.insert(slot.index, slot);
        }
        self
    }

    /// Place a slot at an explicit position.
    #[must_use]
    pub fn with_slot_at(mut self, position: u8, slot: LoadoutSlot) -> Self {
        self.slots.insert(position, slot);
        self
    }

    /// Set the reported zone.
    #[must_use]
    pub fn with_zone(mut self, zone: ZoneUse) -> Self {
        self.zone = zone;
        self
    }

    /// Make `equip_loadout` fail as if the host rejected it.
    #[must_use]
    pub fn failing_equip(mut self, reason: impl Into<String>) -> Self {
        self.equip_error = Some(reason.into());
        self
    }

    /// Make `select_catalog_entry` fail with `error`.
    #[must_use]
    pub fn failing_select(mut self, error: GatewayError) -> Self {
        self.select_error = Some(error);
        self
    }

    /// Get captured equip calls.
    #[must_use]
    pub fn equipped(&self) -> Vec<u8> {
        self.equipped.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Get captured select calls.
    #[must_use]
    pub fn selected(&self) -> Vec<EntryId> {
        self.selected.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl ActionGateway for MockGateway {
    fn loadout_slot(&self, index: u8) -> Option<LoadoutSlot> {
        self.slots.get(&index).copied()
    }

    fn equip_loadout(&self, index: u8) -> GatewayResult<()> {
        if let Ok(mut guard) = self.equipped.lock() {
            guard.push(index);
        }
        match &self.equip_error {
            Some(reason) => Err(GatewayError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }

    fn current_zone(&self) -> ZoneUse {
        self.zone
    }

    fn select_catalog_entry(&self, id: EntryId) -> GatewayResult<()> {
        if let Ok(mut guard) = self.selected.lock() {
            guard.push(id);
        }
        match &self.select_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
