//! Best-loadout selection over the host gearset table.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{CatalogEntry, EntryId};
use crate::error::{SwitchError, SwitchResult};
use crate::gateway::ActionGateway;

/// Number of rows in the host gearset table.
pub const LOADOUT_SLOT_COUNT: u8 = 100;

/// One stored equipment preset as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSlot {
    /// Whether the row holds a saved gearset.
    pub exists: bool,
    /// Index the host stored in the row itself.
    pub index: u8,
    /// Class/job the gearset belongs to.
    pub job: EntryId,
    /// Average item level of the gearset.
    pub item_level: i16,
}

impl LoadoutSlot {
    /// Whether the row at `position` is a usable gearset for `job`.
    ///
    /// The stored index must equal the row position; rows where the two
    /// disagree are stale host data.
    #[must_use]
    pub fn qualifies(&self, position: u8, job: EntryId) -> bool {
        self.exists && self.index == position && self.job == job
    }
}

/// Pick the best gearset for `job` among `(position, slot)` rows.
///
/// Highest item level wins; equal levels keep the earliest row.
pub fn best_loadout<I>(rows: I, job: EntryId) -> Option<LoadoutSlot>
where
    I: IntoIterator<Item = (u8, LoadoutSlot)>,
{
    let mut best: Option<LoadoutSlot> = None;
    for (position, slot) in rows {
        if !slot.qualifies(position, job) {
            continue;
        }
        if best.is_none_or(|b| slot.item_level > b.item_level) {
            best = Some(slot);
        }
    }
    best
}

/// Equip the best gearset for a class/job entry.
///
/// # Errors
///
/// Returns [`SwitchError::NoLoadout`] when no row qualifies (no gateway
/// action is taken), or [`SwitchError::ExternalCall`] if equipping fails.
pub fn equip_best_loadout(
    gateway: &dyn ActionGateway,
    entry: &CatalogEntry,
) -> SwitchResult<LoadoutSlot> {
    let rows = (0..LOADOUT_SLOT_COUNT)
        .filter_map(|position| gateway.loadout_slot(position).map(|slot| (position, slot)));

    let Some(slot) = best_loadout(rows, entry.id) else {
        return Err(SwitchError::NoLoadout {
            job: entry.name.clone(),
        });
    };

    debug!(
        job = %entry.id,
        slot = slot.index,
        item_level = slot.item_level,
        "Selected gearset"
    );
    gateway
        .equip_loadout(slot.index)
        .map_err(|source| SwitchError::ExternalCall {
            action: "equip gearset",
            source,
        })?;
    info!(job = %entry.name, slot = slot.index, "Equipped best gearset for class job");
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: EntryId = EntryId(19);
    const B: EntryId = EntryId(21);

    fn slot(index: u8, job: EntryId, item_level: i16) -> LoadoutSlot {
        LoadoutSlot {
            exists: true,
            index,
            job,
            item_level,
        }
    }

    fn rows(slots: &[LoadoutSlot]) -> Vec<(u8, LoadoutSlot)> {
        slots
            .iter()
            .enumerate()
            .map(|(i, s)| (u8::try_from(i).unwrap(), *s))
            .collect()
    }

    #[test]
    fn test_highest_item_level_wins() {
        let table = rows(&[slot(0, A, 50), slot(1, A, 80)]);
        assert_eq!(best_loadout(table, A).unwrap().index, 1);
    }

    #[test]
    fn test_ties_keep_first_slot() {
        let table = rows(&[slot(0, B, 10), slot(1, A, 80), slot(2, A, 80)]);
        assert_eq!(best_loadout(table, A).unwrap().index, 1);
    }

    #[test]
    fn test_no_matching_job() {
        let table = rows(&[slot(0, A, 50), slot(1, A, 80)]);
        assert!(best_loadout(table, B).is_none());
    }

    #[test]
    fn test_missing_and_misindexed_rows_are_skipped() {
        let mut ghost = slot(0, A, 999);
        ghost.exists = false;
        let misindexed = slot(7, A, 500);
        let table = rows(&[ghost, misindexed, slot(2, A, 40)]);
        assert_eq!(best_loadout(table, A).unwrap().index, 2);
    }

    #[test]
    fn test_zero_item_level_still_qualifies() {
        let table = rows(&[slot(0, A, 0)]);
        assert_eq!(best_loadout(table, A).unwrap().index, 0);
    }
}
