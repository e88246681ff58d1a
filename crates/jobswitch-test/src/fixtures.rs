//! Test fixtures for catalogs and gearsets.

use jobswitch_core::{
    Catalog, CatalogEntry, CatalogKind, EntryId, LoadoutSlot, StaticCatalogSource,
};

/// Gladiator class id.
pub const GLADIATOR: EntryId = EntryId(1);
/// Paladin job id.
pub const PALADIN: EntryId = EntryId(19);
/// Warrior job id.
pub const WARRIOR: EntryId = EntryId(21);
/// White Mage job id.
pub const WHITE_MAGE: EntryId = EntryId(24);

/// Phantom Knight id.
pub const PHANTOM_KNIGHT: EntryId = EntryId(1);
/// Phantom Cannoneer id.
pub const PHANTOM_CANNONEER: EntryId = EntryId(9);

const CLASS_JOBS: &[(u32, &str, &str)] = &[
    (0, "adventurer", "ADV"),
    (1, "gladiator", "GLA"),
    (2, "pugilist", "PGL"),
    (3, "marauder", "MRD"),
    (4, "lancer", "LNC"),
    (5, "archer", "ARC"),
    (6, "conjurer", "CNJ"),
    (7, "thaumaturge", "THM"),
    (19, "paladin", "PLD"),
    (20, "monk", "MNK"),
    (21, "warrior", "WAR"),
    (22, "dragoon", "DRG"),
    (23, "bard", "BRD"),
    (24, "white mage", "WHM"),
    (25, "black mage", "BLM"),
    (42, "", "NIL"),
    (43, "limited", ""),
];

const PHANTOM_JOBS: &[(u32, &str, &str)] = &[
    (0, "フリーランサー", "Phantom Freelancer"),
    (1, "ナイト", "Phantom Knight"),
    (2, "バーサーカー", "Phantom Berserker"),
    (3, "モンク", "Phantom Monk"),
    (4, "狩人", "Phantom Ranger"),
    (5, "侍", "Phantom Samurai"),
    (6, "吟遊詩人", "Phantom Bard"),
    (7, "風水士", "Phantom Geomancer"),
    (8, "時魔道士", "Phantom Time Mage"),
    (9, "砲撃士", "Phantom Cannoneer"),
    (10, "薬師", "Phantom Chemist"),
    (11, "予言士", "Phantom Oracle"),
    (12, "シーフ", "Phantom Thief"),
];

/// Class/job rows, including a sentinel row, a blank-name row and a
/// blank-acronym row that must never register.
#[must_use]
pub fn class_job_entries() -> Vec<CatalogEntry> {
    CLASS_JOBS
        .iter()
        .map(|(id, name, acronym)| CatalogEntry::new(EntryId(*id), *name).with_acronym(*acronym))
        .collect()
}

/// Phantom job rows with localised names and English alternates.
#[must_use]
pub fn phantom_job_entries() -> Vec<CatalogEntry> {
    PHANTOM_JOBS
        .iter()
        .map(|(id, name, alt)| CatalogEntry::new(EntryId(*id), *name).with_name_alt(*alt))
        .collect()
}

/// The class/job catalog.
#[must_use]
pub fn class_job_catalog() -> Catalog {
    Catalog::new(CatalogKind::ClassJob, class_job_entries())
}

/// The phantom job catalog.
#[must_use]
pub fn phantom_job_catalog() -> Catalog {
    Catalog::new(CatalogKind::PhantomJob, phantom_job_entries())
}

/// A source serving both catalogs.
#[must_use]
pub fn catalog_source() -> StaticCatalogSource {
    StaticCatalogSource::new()
        .with_catalog(CatalogKind::ClassJob, class_job_entries())
        .with_catalog(CatalogKind::PhantomJob, phantom_job_entries())
}

/// A saved gearset whose stored index is `index`.
#[must_use]
pub fn slot(index: u8, job: EntryId, item_level: i16) -> LoadoutSlot {
    LoadoutSlot {
        exists: true,
        index,
        job,
        item_level,
    }
}

/// An unused gearset row.
#[must_use]
pub fn empty_slot(index: u8) -> LoadoutSlot {
    LoadoutSlot {
        exists: false,
        index,
        job: EntryId::SENTINEL,
        item_level: 0,
    }
}
