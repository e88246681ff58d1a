//! Config commands: show the effective settings and migrate old files.

use std::path::Path;

use anyhow::{Result, bail};
use jobswitch_config::{Config, ConfigFormat, loader};

use crate::context::Context;
use crate::theme::Theme;

fn parse_format(format: &str) -> Result<ConfigFormat> {
    match format.to_ascii_lowercase().as_str() {
        "json" => Ok(ConfigFormat::Json),
        "toml" => Ok(ConfigFormat::Toml),
        other => bail!("unknown config format '{other}'; expected json or toml"),
    }
}

/// Show the effective settings and where they came from.
pub(crate) fn show_config(ctx: &Context, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let loaded = ctx.load_config()?;

    match &loaded.path {
        Some(path) => println!("{}", Theme::info(&format!("Loaded from {}", path.display()))),
        None => println!("{}", Theme::info("No settings file, showing defaults")),
    }
    if let Some(from) = loaded.migrated_from {
        println!(
            "{}",
            Theme::warning(&format!("File is at version {from}; run `jobswitch config migrate`"))
        );
    }
    println!("{}", Theme::separator());
    println!("{}", loader::to_string(&loaded.config, format)?);
    Ok(())
}

/// Migrate a settings file to the current schema.
///
/// Prints the result; with `write` the file is rewritten in place.
pub(crate) fn migrate_config(path: &Path, write: bool, format: Option<&str>) -> Result<()> {
    let loaded = Config::load(path)?;
    let format = match format {
        Some(f) => parse_format(f)?,
        None => ConfigFormat::from_path(path),
    };

    match loaded.migrated_from {
        Some(from) => println!(
            "{}",
            Theme::success(&format!(
                "Migrated version {from} to {}",
                loaded.config.version
            ))
        ),
        None => println!("{}", Theme::info("Already at the current version")),
    }

    if write {
        if loaded.needs_save() {
            loaded.config.save(path)?;
            println!("{}", Theme::success(&format!("Wrote {}", path.display())));
        }
    } else {
        println!("{}", Theme::separator());
        println!("{}", loader::to_string(&loaded.config, format)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("TOML").unwrap(), ConfigFormat::Toml);
        assert_eq!(parse_format("json").unwrap(), ConfigFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn test_migrate_writes_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobswitch.json");
        std::fs::write(&path, r#"{"Version": 1, "RegisterPhantomJobs": false}"#).unwrap();

        migrate_config(&path, true, None).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.migrated_from, None);
        assert!(!reloaded.config.register_phantom_jobs);
    }
}
