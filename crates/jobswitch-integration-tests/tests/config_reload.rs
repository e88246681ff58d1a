//! Integration tests for settings files driving the live command set.

use std::sync::Arc;

use jobswitch_config::Config;
use jobswitch_plugin::{HostServices, JobSwitcher, SwitcherSettings};
use jobswitch_test::{MockCommandHost, MockGateway, MockNotifier, fixtures};

fn switcher_for(config: &Config, host: &Arc<MockCommandHost>) -> JobSwitcher {
    let services = HostServices::new(
        host.clone(),
        Arc::new(MockNotifier::new()),
        Arc::new(MockGateway::new()),
    );
    JobSwitcher::new(
        SwitcherSettings::from(config),
        services,
        &fixtures::catalog_source(),
    )
}

#[test]
fn test_v0_file_migrates_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobswitch.json");
    std::fs::write(
        &path,
        r#"{"Version": 0, "Prefix": "j", "Suffix": "", "RegisterLowercaseCommands": true, "RegisterUppercaseCommands": false}"#,
    )
    .unwrap();

    let loaded = Config::load_or_default(&path).unwrap();
    assert_eq!(loaded.migrated_from, Some(0));
    loaded.config.save(&path).unwrap();

    let host = Arc::new(MockCommandHost::new());
    let _switcher = switcher_for(&loaded.config, &host);
    assert!(host.contains("/jpld"));
    assert!(!host.contains("/JPLD"));
    assert!(host.contains("/pj"));

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.migrated_from, None);
    assert_eq!(reloaded.config, loaded.config);
}

#[test]
fn test_v0_with_no_casing_disables_class_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobswitch.json");
    std::fs::write(
        &path,
        r#"{"Version": 0, "RegisterLowercaseCommands": false, "RegisterUppercaseCommands": false}"#,
    )
    .unwrap();

    let loaded = Config::load(&path).unwrap();
    assert!(!loaded.config.register_class_jobs);
    assert!(loaded.config.register_phantom_jobs);
}

#[test]
fn test_saved_change_applies_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobswitch.toml");

    let host = Arc::new(MockCommandHost::new());
    let mut switcher = switcher_for(&Config::default(), &host);
    assert!(host.contains("/PJ"));

    let changed = Config {
        register_phantom_jobs: false,
        suffix: "!".to_string(),
        ..Config::default()
    };
    changed.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    switcher.apply_settings(SwitcherSettings::from(&loaded.config));
    assert!(!host.contains("/PJ"));
    assert!(!host.contains("/pj"));
    assert!(host.contains("/PLD!"));
    assert!(!host.contains("/PLD"));
}

#[test]
fn test_future_version_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobswitch.json");
    std::fs::write(&path, r#"{"Version": 9}"#).unwrap();

    assert!(matches!(
        Config::load_or_default(&path),
        Err(jobswitch_config::ConfigError::UnsupportedVersion { version: 9, .. })
    ));
}
