//! Mapping typed command text to catalog entries.

mod exact;
mod fuzzy;

pub use exact::{Affixes, resolve_exact};
pub use fuzzy::{ALT_NAME_PREFIX, FuzzyMatch, MatchTier, character_match_score, resolve_fuzzy};

/// Leading character the host puts in front of every chat command.
pub const COMMAND_MARKER: char = '/';

/// Remove one leading [`COMMAND_MARKER`], if present.
#[must_use]
pub fn strip_marker(command: &str) -> &str {
    command.strip_prefix(COMMAND_MARKER).unwrap_or(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("/pld"), "pld");
        assert_eq!(strip_marker("pld"), "pld");
        assert_eq!(strip_marker("//pld"), "/pld");
        assert_eq!(strip_marker(""), "");
    }
}
