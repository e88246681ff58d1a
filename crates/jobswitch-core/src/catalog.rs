//! Switchable targets and the catalog that indexes them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Opaque row identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Placeholder row present in host tables; never registered as a command.
    pub const SENTINEL: Self = Self(0);

    /// Whether this is the placeholder row.
    #[must_use]
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which catalog an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Regular classes and jobs, switched by equipping a gearset.
    ClassJob,
    /// Phantom jobs, switched through the support-job agent.
    PhantomJob,
}

impl CatalogKind {
    /// Every kind, in load order.
    pub const ALL: [Self; 2] = [Self::ClassJob, Self::PhantomJob];

    /// Human-readable label used in help text and messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ClassJob => "Class/Job",
            Self::PhantomJob => "Phantom Job",
        }
    }

    /// File stem used by file-backed catalog sources.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::ClassJob => "class_jobs",
            Self::PhantomJob => "phantom_jobs",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Row identifier.
    pub id: EntryId,
    /// Display name in the client language.
    pub name: String,
    /// Secondary name, e.g. the English label on a localised client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_alt: Option<String>,
    /// Short code used for exact command matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
}

impl CatalogEntry {
    /// Create an entry with only a name.
    #[must_use]
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            name_alt: None,
            acronym: None,
        }
    }

    /// Set the secondary name.
    #[must_use]
    pub fn with_name_alt(mut self, name_alt: impl Into<String>) -> Self {
        self.name_alt = Some(name_alt.into());
        self
    }

    /// Set the acronym.
    #[must_use]
    pub fn with_acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = Some(acronym.into());
        self
    }

    /// The acronym, if present and not blank.
    #[must_use]
    pub fn acronym(&self) -> Option<&str> {
        self.acronym
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// The secondary name, if present and not blank.
    #[must_use]
    pub fn name_alt(&self) -> Option<&str> {
        self.name_alt.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Whether commands may be derived from this entry.
    ///
    /// Entries with a blank name, a blank acronym or the sentinel id are
    /// placeholders in the host tables.
    #[must_use]
    pub fn is_registrable(&self) -> bool {
        !self.id.is_sentinel() && !self.name.trim().is_empty() && self.acronym().is_some()
    }
}

/// An immutable, indexed set of catalog entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    entries: Vec<CatalogEntry>,
    /// Case-folded acronym -> position in `entries`.
    by_acronym: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, indexing every non-blank acronym.
    ///
    /// When two entries share an acronym after case folding, the first in
    /// catalog order keeps the index slot.
    #[must_use]
    pub fn new(kind: CatalogKind, entries: Vec<CatalogEntry>) -> Self {
        let mut by_acronym: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let Some(acronym) = entry.acronym() else {
                continue;
            };
            let key = acronym.to_lowercase();
            if let Some(&first) = by_acronym.get(&key) {
                debug!(
                    kind = %kind,
                    acronym,
                    kept = %entries[first].id,
                    dropped = %entry.id,
                    "Duplicate acronym in catalog"
                );
                continue;
            }
            by_acronym.insert(key, position);
        }

        Self {
            kind,
            entries,
            by_acronym,
        }
    }

    /// The category of this catalog.
    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive acronym lookup.
    #[must_use]
    pub fn by_acronym(&self, acronym: &str) -> Option<&CatalogEntry> {
        self.by_acronym
            .get(&acronym.trim().to_lowercase())
            .and_then(|&position| self.entries.get(position))
    }
}
