//! Runtime switches consumed by the registry and handler, and the bridge
//! from the persisted [`jobswitch_config::Config`].

use jobswitch_config::Config;
use jobswitch_core::Affixes;

/// Which commands to register and how to spell them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SwitcherSettings {
    /// Register one command per class/job acronym.
    pub class_jobs: bool,
    /// Register the phantom-job search command.
    pub phantom_jobs: bool,
    /// Register lower-case spellings.
    pub lowercase: bool,
    /// Register upper-case spellings.
    pub uppercase: bool,
    /// Prefix/suffix around class/job acronyms.
    pub affixes: Affixes,
}

impl Default for SwitcherSettings {
    fn default() -> Self {
        Self {
            class_jobs: true,
            phantom_jobs: true,
            lowercase: true,
            uppercase: true,
            affixes: Affixes::default(),
        }
    }
}

impl From<&Config> for SwitcherSettings {
    fn from(config: &Config) -> Self {
        Self {
            class_jobs: config.register_class_jobs,
            phantom_jobs: config.register_phantom_jobs,
            lowercase: config.register_lowercase_commands,
            uppercase: config.register_uppercase_commands,
            affixes: Affixes::new(&config.prefix, &config.suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_from_config() {
        let config = Config {
            register_phantom_jobs: false,
            register_lowercase_commands: false,
            prefix: "j".to_owned(),
            ..Config::default()
        };
        let settings = SwitcherSettings::from(&config);
        assert!(settings.class_jobs);
        assert!(!settings.phantom_jobs);
        assert!(!settings.lowercase);
        assert!(settings.uppercase);
        assert_eq!(settings.affixes, Affixes::new("j", ""));
    }

    #[test]
    fn test_default_matches_default_config() {
        assert_eq!(
            SwitcherSettings::from(&Config::default()),
            SwitcherSettings::default()
        );
    }
}
