//! Shared state resolved from the global flags.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use jobswitch_config::{Config, LoadedConfig, loader};
use jobswitch_core::{Catalog, CatalogKind, FileCatalogSource, load_catalog};
use jobswitch_plugin::SwitcherSettings;
use tracing::warn;

/// Where settings and catalogs come from.
pub(crate) struct Context {
    catalog_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl Context {
    pub(crate) fn new(catalog_dir: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            catalog_dir,
            config_path,
        }
    }

    /// The explicit `--config` path, else the per-user default.
    pub(crate) fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        match loader::default_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "No config directory, using default settings");
                None
            },
        }
    }

    /// Load the effective settings file, falling back to defaults.
    pub(crate) fn load_config(&self) -> Result<LoadedConfig> {
        match self.config_path() {
            Some(path) => Ok(Config::load_or_default(&path)?),
            None => Ok(LoadedConfig {
                config: Config::default(),
                migrated_from: None,
                path: None,
            }),
        }
    }

    pub(crate) fn settings(&self) -> Result<SwitcherSettings> {
        Ok(SwitcherSettings::from(&self.load_config()?.config))
    }

    pub(crate) fn source(&self) -> FileCatalogSource {
        FileCatalogSource::new(&self.catalog_dir)
    }

    /// Load one catalog, failing if it is unavailable.
    pub(crate) fn catalog(&self, kind: CatalogKind) -> Result<Catalog> {
        load_catalog(&self.source(), kind).ok_or_else(|| {
            anyhow!(
                "{kind} data is unavailable in {}",
                self.catalog_dir.display()
            )
        })
    }
}
