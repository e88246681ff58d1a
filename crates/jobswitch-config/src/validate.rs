//! Configuration validation.

use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{CURRENT_VERSION, Config};

/// Longest accepted prefix or suffix.
pub const MAX_AFFIX_LEN: usize = 16;

/// Validate a loaded or about-to-be-saved configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    if config.version != CURRENT_VERSION {
        return Err(ConfigError::ValidationError {
            field: "Version".to_owned(),
            message: format!(
                "expected version {CURRENT_VERSION}, got {}",
                config.version
            ),
        });
    }

    validate_affix("Prefix", &config.prefix)?;
    validate_affix("Suffix", &config.suffix)?;

    for category in silenced_categories(config) {
        warn!(
            category,
            "Commands are enabled but both casings are disabled; none will be registered"
        );
    }

    Ok(())
}

/// Command categories that are enabled but will register nothing because
/// both casings are off.
#[must_use]
pub fn silenced_categories(config: &Config) -> Vec<&'static str> {
    if config.register_lowercase_commands || config.register_uppercase_commands {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(2);
    if config.register_class_jobs {
        out.push("class/job");
    }
    if config.register_phantom_jobs {
        out.push("phantom job");
    }
    out
}

fn validate_affix(field: &str, value: &str) -> ConfigResult<()> {
    if value.chars().count() > MAX_AFFIX_LEN {
        return Err(ConfigError::ValidationError {
            field: field.to_owned(),
            message: format!("must be at most {MAX_AFFIX_LEN} characters"),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::ValidationError {
            field: field.to_owned(),
            message: "must not contain whitespace".to_owned(),
        });
    }
    if value.contains('/') {
        return Err(ConfigError::ValidationError {
            field: field.to_owned(),
            message: "must not contain '/'".to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_affix_rules() {
        let mut config = Config {
            prefix: "fjs".to_owned(),
            suffix: "!".to_owned(),
            ..Config::default()
        };
        assert!(validate(&config).is_ok());

        config.prefix = "a b".to_owned();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "Prefix"
        ));

        config.prefix = String::new();
        config.suffix = "/x".to_owned();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "Suffix"
        ));

        config.suffix = "x".repeat(MAX_AFFIX_LEN.saturating_add(1));
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_silenced_categories() {
        assert!(silenced_categories(&Config::default()).is_empty());

        let mut config = Config {
            register_lowercase_commands: false,
            register_uppercase_commands: false,
            ..Config::default()
        };
        assert_eq!(silenced_categories(&config), vec!["class/job", "phantom job"]);
        assert!(validate(&config).is_ok());

        config.register_class_jobs = false;
        assert_eq!(silenced_categories(&config), vec!["phantom job"]);

        config.register_phantom_jobs = false;
        assert!(silenced_categories(&config).is_empty());

        config.register_phantom_jobs = true;
        config.register_lowercase_commands = true;
        assert!(silenced_categories(&config).is_empty());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let config = Config {
            version: 1,
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }
}
