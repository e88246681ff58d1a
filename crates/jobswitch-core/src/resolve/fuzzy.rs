//! Two-tier fuzzy search used by the phantom-job command.
//!
//! Tier one looks for the query as a contiguous substring of either name
//! and ranks by how early it starts. Only when no entry contains the query
//! does tier two run: a greedy in-order character match, ranked by the
//! number of query characters consumed.

use std::fmt;

use tracing::trace;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{SwitchError, SwitchResult};

/// Leading token removed from the case-folded secondary name before
/// matching. Every phantom job carries it, so leaving it in would make
/// queries such as `"ph"` match all of them.
pub const ALT_NAME_PREFIX: &str = "phantom ";

/// Which tier produced a fuzzy match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// The query is contained verbatim; score is the start index.
    Substring,
    /// The query characters appear in order; score is how many matched.
    Subsequence,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::Subsequence => f.write_str("subsequence"),
        }
    }
}

/// The winning entry of a fuzzy search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch<'c> {
    /// The matched entry.
    pub entry: &'c CatalogEntry,
    /// Tier that produced the match.
    pub tier: MatchTier,
    /// Start index (substring) or matched character count (subsequence).
    pub score: usize,
}

/// Count query characters found in `target` in order, consuming the
/// target left to right without backtracking.
///
/// Scanning stops at the first query character with no remaining
/// occurrence, or when the target is exhausted.
#[must_use]
pub fn character_match_score(query: &str, target: &str) -> usize {
    let mut remaining = target.chars();
    let mut matched: usize = 0;
    for wanted in query.chars() {
        if !remaining.any(|c| c == wanted) {
            break;
        }
        matched = matched.saturating_add(1);
    }
    matched
}

/// Character (not byte) index of the first occurrence of `needle`.
fn char_index_of(haystack: &str, needle: &str) -> Option<usize> {
    let byte = haystack.find(needle)?;
    haystack.get(..byte).map(|head| head.chars().count())
}

/// Case-folded primary and secondary names, the latter without
/// [`ALT_NAME_PREFIX`].
fn folded_names(entry: &CatalogEntry) -> (String, String) {
    let name = entry.name.to_lowercase();
    let alt = entry
        .name_alt()
        .map(|alt| {
            let alt = alt.to_lowercase();
            match alt.strip_prefix(ALT_NAME_PREFIX) {
                Some(rest) => rest.to_owned(),
                None => alt,
            }
        })
        .unwrap_or_default();
    (name, alt)
}

/// Find the best catalog entry for a free-text query.
///
/// # Errors
///
/// Returns [`SwitchError::InvalidInput`] for a blank query (no scan is
/// performed) and [`SwitchError::NotFound`] when neither tier matches.
pub fn resolve_fuzzy<'c>(catalog: &'c Catalog, query: &str) -> SwitchResult<FuzzyMatch<'c>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SwitchError::InvalidInput(
            "Please provide a search query for the Phantom Job (e.g., /pj knight)".to_owned(),
        ));
    }
    let folded = trimmed.to_lowercase();

    let mut best_substring: Option<(usize, &'c CatalogEntry)> = None;
    let mut best_subsequence: Option<(usize, &'c CatalogEntry)> = None;

    for entry in catalog.iter() {
        let (name, alt) = folded_names(entry);

        let index = [char_index_of(&name, &folded), char_index_of(&alt, &folded)]
            .into_iter()
            .flatten()
            .min();
        if let Some(index) = index {
            trace!(entry = %entry.id, index, "substring candidate");
            if best_substring.is_none_or(|(best, _)| index < best) {
                best_substring = Some((index, entry));
            }
            continue;
        }

        let score = character_match_score(&folded, &name).max(character_match_score(&folded, &alt));
        trace!(entry = %entry.id, score, "subsequence candidate");
        if score > best_subsequence.map_or(0, |(best, _)| best) {
            best_subsequence = Some((score, entry));
        }
    }

    let winner = best_substring
        .map(|(score, entry)| (MatchTier::Substring, score, entry))
        .or_else(|| best_subsequence.map(|(score, entry)| (MatchTier::Subsequence, score, entry)));

    match winner {
        Some((tier, score, entry)) => Ok(FuzzyMatch { entry, tier, score }),
        None => Err(SwitchError::NotFound {
            kind: catalog.kind(),
            query: trimmed.to_owned(),
        }),
    }
}
