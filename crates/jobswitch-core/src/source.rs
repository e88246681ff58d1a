//! Catalog data sources.
//!
//! The host's data tables are reached through [`CatalogSource`]. A failed
//! load is never fatal: [`load_catalog`] logs a warning and the category
//! simply gets no commands.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogEntry, CatalogKind};
use crate::error::{SwitchError, SwitchResult};

/// Supplies the ordered entries of a catalog.
pub trait CatalogSource: Send + Sync {
    /// Load every entry of `kind`, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::DataUnavailable`] if the source has no data
    /// for `kind`, or [`SwitchError::CatalogSource`] if the data is
    /// unreadable.
    fn load(&self, kind: CatalogKind) -> SwitchResult<Vec<CatalogEntry>>;
}

/// Load and index one catalog, degrading to `None` on failure.
#[must_use]
pub fn load_catalog(source: &dyn CatalogSource, kind: CatalogKind) -> Option<Catalog> {
    match source.load(kind) {
        Ok(entries) => {
            for entry in &entries {
                debug!(
                    kind = %kind,
                    id = %entry.id,
                    name = %entry.name,
                    name_alt = entry.name_alt().unwrap_or_default(),
                    acronym = entry.acronym().unwrap_or_default(),
                    "Catalog row"
                );
            }
            info!(kind = %kind, count = entries.len(), "Loaded catalog");
            Some(Catalog::new(kind, entries))
        },
        Err(e) => {
            warn!(kind = %kind, error = %e, "Failed to load catalog");
            None
        },
    }
}

/// In-memory catalogs, mainly for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    catalogs: HashMap<CatalogKind, Vec<CatalogEntry>>,
}

impl StaticCatalogSource {
    /// Create a source with no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the entries for `kind`.
    #[must_use]
    pub fn with_catalog(mut self, kind: CatalogKind, entries: Vec<CatalogEntry>) -> Self {
        self.catalogs.insert(kind, entries);
        self
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self, kind: CatalogKind) -> SwitchResult<Vec<CatalogEntry>> {
        self.catalogs
            .get(&kind)
            .cloned()
            .ok_or(SwitchError::DataUnavailable { kind })
    }
}

/// Maximum accepted catalog file size (4 MB).
const MAX_CATALOG_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// TOML catalog layout: a list of `[[entries]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

/// Reads `class_jobs.json` / `phantom_jobs.json` (a JSON array of entries)
/// or the `.toml` equivalents from a directory. JSON wins when both exist.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    dir: PathBuf,
}

impl FileCatalogSource {
    /// Create a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read(path: &Path, kind: CatalogKind) -> SwitchResult<Option<String>> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "catalog file not found, skipping");
                return Ok(None);
            },
            Err(e) => {
                return Err(SwitchError::CatalogSource {
                    kind,
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            },
        };

        if content.len() as u64 > MAX_CATALOG_FILE_SIZE {
            return Err(SwitchError::CatalogSource {
                kind,
                path: path.display().to_string(),
                message: format!(
                    "file is {} bytes, exceeding the {MAX_CATALOG_FILE_SIZE} byte limit",
                    content.len()
                ),
            });
        }
        Ok(Some(content))
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self, kind: CatalogKind) -> SwitchResult<Vec<CatalogEntry>> {
        let stem = kind.file_stem();
        let parse_error = |path: &Path, message: String| SwitchError::CatalogSource {
            kind,
            path: path.display().to_string(),
            message,
        };

        let json_path = self.dir.join(format!("{stem}.json"));
        if let Some(content) = Self::read(&json_path, kind)? {
            return serde_json::from_str(&content).map_err(|e| parse_error(&json_path, e.to_string()));
        }

        let toml_path = self.dir.join(format!("{stem}.toml"));
        if let Some(content) = Self::read(&toml_path, kind)? {
            return toml::from_str::<CatalogFile>(&content)
                .map(|file| file.entries)
                .map_err(|e| parse_error(&toml_path, e.to_string()));
        }

        Err(SwitchError::DataUnavailable { kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;

    #[test]
    fn test_static_source_missing_kind() {
        let source = StaticCatalogSource::new().with_catalog(
            CatalogKind::ClassJob,
            vec![CatalogEntry::new(EntryId(19), "paladin").with_acronym("PLD")],
        );
        assert_eq!(source.load(CatalogKind::ClassJob).unwrap().len(), 1);
        assert!(matches!(
            source.load(CatalogKind::PhantomJob),
            Err(SwitchError::DataUnavailable {
                kind: CatalogKind::PhantomJob
            })
        ));
        assert!(load_catalog(&source, CatalogKind::PhantomJob).is_none());
    }

    #[test]
    fn test_file_source_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("class_jobs.json"),
            r#"[{"id": 0, "name": ""}, {"id": 19, "name": "paladin", "acronym": "PLD"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("phantom_jobs.toml"),
            r#"
            [[entries]]
            id = 1
            name = "ナイト"
            name_alt = "Phantom Knight"
            "#,
        )
        .unwrap();

        let source = FileCatalogSource::new(dir.path());
        let classes = load_catalog(&source, CatalogKind::ClassJob).unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.by_acronym("pld").unwrap().id, EntryId(19));

        let phantoms = load_catalog(&source, CatalogKind::PhantomJob).unwrap();
        assert_eq!(phantoms.entries()[0].name_alt(), Some("Phantom Knight"));
    }

    #[test]
    fn test_file_source_missing_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path());
        assert!(matches!(
            source.load(CatalogKind::ClassJob),
            Err(SwitchError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_file_source_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("class_jobs.json"), "{not json").unwrap();
        let source = FileCatalogSource::new(dir.path());
        assert!(matches!(
            source.load(CatalogKind::ClassJob),
            Err(SwitchError::CatalogSource { .. })
        ));
    }
}
