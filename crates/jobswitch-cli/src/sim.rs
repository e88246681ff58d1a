//! Offline host used by `jobswitch dispatch`.
//!
//! Stands in for the game client: the command table lives in memory, the
//! chat channel is the terminal, and the gearset table and zone come from
//! a TOML state file:
//!
//! ```toml
//! zone = 61
//!
//! [[slots]]
//! index = 0
//! job = 19
//! item_level = 710
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use jobswitch_core::{
    ActionGateway, CommandInfo, CommandSink, EntryId, GatewayResult, HostError, LoadoutSlot,
    Notifier, ZoneUse,
};
use serde::Deserialize;

use crate::theme::Theme;

fn default_exists() -> bool {
    true
}

/// One gearset row in the state file.
#[derive(Debug, Clone, Deserialize)]
struct SlotRow {
    /// Table position; defaults to `index`.
    #[serde(default)]
    position: Option<u8>,
    index: u8,
    job: u32,
    item_level: i16,
    #[serde(default = "default_exists")]
    exists: bool,
}

/// Simulated game state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SimState {
    zone: u16,
    slots: Vec<SlotRow>,
}

impl SimState {
    /// Read a state file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read state file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse state file {}", path.display()))
    }
}

/// An action the simulated host performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SimAction {
    Equipped(u8),
    Selected(EntryId),
}

/// In-memory host implementing every seam the plugin needs.
#[derive(Debug, Default)]
pub(crate) struct SimHost {
    commands: Mutex<BTreeMap<String, CommandInfo>>,
    slots: BTreeMap<u8, LoadoutSlot>,
    zone: ZoneUse,
    actions: Mutex<Vec<SimAction>>,
}

impl SimHost {
    pub(crate) fn new(state: SimState) -> Self {
        let slots = state
            .slots
            .into_iter()
            .map(|row| {
                let slot = LoadoutSlot {
                    exists: row.exists,
                    index: row.index,
                    job: EntryId(row.job),
                    item_level: row.item_level,
                };
                (row.position.unwrap_or(row.index), slot)
            })
            .collect();
        Self {
            commands: Mutex::new(BTreeMap::new()),
            slots,
            zone: ZoneUse(state.zone),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Actions performed so far.
    pub(crate) fn actions(&self) -> Vec<SimAction> {
        self.actions.lock().map(|g| g.clone()).unwrap_or_default()
    }

    fn record(&self, action: SimAction) {
        if let Ok(mut guard) = self.actions.lock() {
            guard.push(action);
        }
    }
}

impl CommandSink for SimHost {
    fn contains(&self, command: &str) -> bool {
        self.commands
            .lock()
            .map(|g| g.contains_key(command))
            .unwrap_or(false)
    }

    fn add_handler(&self, command: &str, info: CommandInfo) -> Result<(), HostError> {
        let mut guard = self.commands.lock().map_err(|_| HostError::CommandRejected {
            command: command.to_string(),
            reason: "command table poisoned".to_string(),
        })?;
        guard.insert(command.to_string(), info);
        Ok(())
    }

    fn remove_handler(&self, command: &str) -> bool {
        self.commands
            .lock()
            .map(|mut g| g.remove(command).is_some())
            .unwrap_or(false)
    }
}

impl Notifier for SimHost {
    fn print(&self, message: &str) {
        println!("{}", Theme::info(message));
    }

    fn print_error(&self, message: &str) {
        eprintln!("{}", Theme::error(message));
    }
}

impl ActionGateway for SimHost {
    fn loadout_slot(&self, index: u8) -> Option<LoadoutSlot> {
        self.slots.get(&index).copied()
    }

    fn equip_loadout(&self, index: u8) -> GatewayResult<()> {
        self.record(SimAction::Equipped(index));
        Ok(())
    }

    fn current_zone(&self) -> ZoneUse {
        self.zone
    }

    fn select_catalog_entry(&self, id: EntryId) -> GatewayResult<()> {
        self.record(SimAction::Selected(id));
        Ok(())
    }
}
