//! Exact acronym resolution for class/job commands.

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{SwitchError, SwitchResult};

use super::{COMMAND_MARKER, strip_marker};

/// Optional text wrapped around every class/job acronym command.
///
/// With prefix `j` and suffix `!`, the paladin command is `/jpld!`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affixes {
    prefix: String,
    suffix: String,
}

impl Affixes {
    /// Create affixes; surrounding whitespace is dropped.
    #[must_use]
    pub fn new(prefix: impl AsRef<str>, suffix: impl AsRef<str>) -> Self {
        Self {
            prefix: prefix.as_ref().trim().to_owned(),
            suffix: suffix.as_ref().trim().to_owned(),
        }
    }

    /// The configured prefix (may be empty).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The configured suffix (may be empty).
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether neither a prefix nor a suffix is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Build the full command string for an acronym, marker included.
    #[must_use]
    pub fn apply(&self, acronym: &str) -> String {
        format!("{COMMAND_MARKER}{}{acronym}{}", self.prefix, self.suffix)
    }

    /// Remove the prefix and suffix from a token, each only when present.
    /// Matching ignores case.
    #[must_use]
    pub fn strip<'a>(&self, token: &'a str) -> &'a str {
        let token = strip_prefix_ignore_case(token, &self.prefix).unwrap_or(token);
        strip_suffix_ignore_case(token, &self.suffix).unwrap_or(token)
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let head = s.get(..prefix.len())?;
    if head.to_lowercase() == prefix.to_lowercase() {
        s.get(prefix.len()..)
    } else {
        None
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() {
        return None;
    }
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    if tail.to_lowercase() == suffix.to_lowercase() {
        s.get(..split)
    } else {
        None
    }
}

/// Resolve a typed command (e.g. `/PLD`, `pld`, `/jpld!`) to its entry.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for a blank command and
/// [`SwitchError::NotFound`] when no acronym matches.
pub fn resolve_exact<'c>(
    catalog: &'c Catalog,
    affixes: &Affixes,
    command: &str,
) -> SwitchResult<&'c CatalogEntry> {
    let token = strip_marker(command.trim());
    if token.trim().is_empty() {
        return Err(SwitchError::InvalidInput(
            "Please provide a class or job command (e.g., /pld)".to_owned(),
        ));
    }

    catalog
        .by_acronym(affixes.strip(token))
        .ok_or_else(|| SwitchError::NotFound {
            kind: catalog.kind(),
            query: token.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogKind, EntryId};
    use crate::source::{FileCatalogSource, load_catalog};

    fn catalog() -> Catalog {
        Catalog::new(
            CatalogKind::ClassJob,
            vec![
                CatalogEntry::new(EntryId(19), "paladin").with_acronym("PLD"),
                CatalogEntry::new(EntryId(21), "warrior").with_acronym("WAR"),
                CatalogEntry::new(EntryId(42), "pictomancer").with_acronym("PCT"),
            ],
        )
    }

    #[test]
    fn test_resolves_any_casing() {
        let catalog = catalog();
        let affixes = Affixes::default();
        for command in ["/pld", "/PLD", "/Pld", "pld"] {
            assert_eq!(
                resolve_exact(&catalog, &affixes, command).unwrap().id,
                EntryId(19),
                "{command}"
            );
        }
    }

    #[test]
    fn test_resolves_with_affixes() {
        let catalog = catalog();
        let affixes = Affixes::new("j", "!");
        assert_eq!(affixes.apply("WAR"), "/jWAR!");
        assert_eq!(
            resolve_exact(&catalog, &affixes, "/JWAR!").unwrap().id,
            EntryId(21)
        );
        assert_eq!(
            resolve_exact(&catalog, &affixes, "/jwar!").unwrap().id,
            EntryId(21)
        );
    }

    #[test]
    fn test_every_bundled_acronym_resolves_to_its_entry() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let catalog = load_catalog(&FileCatalogSource::new(dir), CatalogKind::ClassJob).unwrap();
        assert!(catalog.len() > 40);

        for affixes in [Affixes::default(), Affixes::new("x", "!")] {
            for entry in catalog.iter() {
                let Some(acronym) = entry.acronym() else {
                    continue;
                };
                let command = affixes.apply(acronym);
                for typed in [command.clone(), command.to_lowercase(), command.to_uppercase()] {
                    assert_eq!(
                        resolve_exact(&catalog, &affixes, &typed).unwrap().id,
                        entry.id,
                        "{typed}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_affixes_are_optional_when_stripping() {
        let affixes = Affixes::new("fs", "");
        assert_eq!(affixes.strip("fspct"), "pct");
        assert_eq!(affixes.strip("pct"), "pct");
        assert_eq!(affixes.strip("f"), "f");
    }

    #[test]
    fn test_not_found() {
        let catalog = catalog();
        let err = resolve_exact(&catalog, &Affixes::default(), "/xyz").unwrap_err();
        assert!(matches!(
            err,
            SwitchError::NotFound { kind: CatalogKind::ClassJob, ref query } if query == "xyz"
        ));
    }

    #[test]
    fn test_blank_is_invalid_input() {
        let catalog = catalog();
        for command in ["", "   ", "/"] {
            let err = resolve_exact(&catalog, &Affixes::default(), command).unwrap_err();
            assert!(matches!(err, SwitchError::InvalidInput(_)), "{command:?}");
        }
    }

    #[test]
    fn test_multibyte_affix_does_not_panic() {
        let affixes = Affixes::new("ジ", "");
        assert_eq!(affixes.strip("ジpld"), "pld");
        assert_eq!(affixes.strip("p"), "p");
    }
}
