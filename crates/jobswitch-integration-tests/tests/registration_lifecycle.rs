//! Integration tests for the host command table across the plugin's life.
//!
//! Covers load, settings changes, foreign commands that must survive, and
//! teardown on drop.

use std::sync::Arc;

use jobswitch_core::{Affixes, resolve_exact};
use jobswitch_plugin::{CommandTarget, HostServices, JobSwitcher, SwitcherSettings};
use jobswitch_test::{MockCommandHost, MockGateway, MockNotifier, fixtures};

fn services(host: &Arc<MockCommandHost>) -> HostServices {
    HostServices::new(
        host.clone(),
        Arc::new(MockNotifier::new()),
        Arc::new(MockGateway::new()),
    )
}

#[test]
fn test_live_set_tracks_settings() {
    let host = Arc::new(MockCommandHost::new());
    let mut switcher = JobSwitcher::new(
        SwitcherSettings::default(),
        services(&host),
        &fixtures::catalog_source(),
    );
    let all = host.commands();
    assert!(all.contains(&"/GLA".to_string()));
    assert!(all.contains(&"/blm".to_string()));
    assert!(all.contains(&"/PJ".to_string()));

    // lower case only
    switcher.apply_settings(SwitcherSettings {
        uppercase: false,
        ..SwitcherSettings::default()
    });
    assert!(host.commands().iter().all(|c| *c == c.to_lowercase()));
    assert!(host.contains("/pj"));

    // nothing
    switcher.apply_settings(SwitcherSettings {
        class_jobs: false,
        phantom_jobs: false,
        ..SwitcherSettings::default()
    });
    assert!(host.is_empty());
    assert!(switcher.registry().is_empty());

    // back to defaults reproduces the original set exactly
    switcher.apply_settings(SwitcherSettings::default());
    assert_eq!(host.commands(), all);
}

#[test]
fn test_registry_matches_host_after_every_change() {
    let host = Arc::new(MockCommandHost::new());
    let mut switcher = JobSwitcher::new(
        SwitcherSettings::default(),
        services(&host),
        &fixtures::catalog_source(),
    );

    for settings in [
        SwitcherSettings {
            affixes: Affixes::new("x", ""),
            ..SwitcherSettings::default()
        },
        SwitcherSettings {
            affixes: Affixes::new("", "job"),
            lowercase: false,
            ..SwitcherSettings::default()
        },
        SwitcherSettings::default(),
    ] {
        switcher.apply_settings(settings);
        let owned: Vec<String> = switcher
            .registry()
            .registrations()
            .map(|r| r.command.clone())
            .collect();
        assert_eq!(owned, host.commands());
    }
}

#[test]
fn test_foreign_commands_survive() {
    let host = Arc::new(MockCommandHost::with_preexisting(["/WAR", "/help"]));
    let switcher = JobSwitcher::new(
        SwitcherSettings::default(),
        services(&host),
        &fixtures::catalog_source(),
    );

    assert!(!switcher.registry().contains("/WAR"));
    assert!(switcher.registry().contains("/war"));
    assert_eq!(
        host.info("/WAR").map(|i| i.help_message),
        Some("owned by another plugin".to_string())
    );

    drop(switcher);
    assert_eq!(host.commands(), vec!["/WAR".to_string(), "/help".to_string()]);
}

#[test]
fn test_rejected_command_not_tracked() {
    let host = Arc::new(MockCommandHost::new().rejecting("/pld"));
    let mut switcher = JobSwitcher::new(
        SwitcherSettings::default(),
        services(&host),
        &fixtures::catalog_source(),
    );

    assert!(!switcher.registry().contains("/pld"));
    assert!(switcher.registry().contains("/PLD"));
    switcher.unregister();
    assert!(host.is_empty());
}

#[test]
fn test_help_hidden_from_host_list() {
    let host = Arc::new(MockCommandHost::new());
    let _switcher = JobSwitcher::new(
        SwitcherSettings::default(),
        services(&host),
        &fixtures::catalog_source(),
    );

    let info = host.info("/WHM").unwrap();
    assert!(!info.show_in_help);
    assert_eq!(info.help_message, "Switches to white mage Class/Job");
}

#[test]
fn test_every_class_command_resolves_to_its_target() {
    let host = Arc::new(MockCommandHost::new());
    let catalog = fixtures::class_job_catalog();

    for affixes in [Affixes::default(), Affixes::new("j", "!")] {
        let settings = SwitcherSettings {
            affixes: affixes.clone(),
            ..SwitcherSettings::default()
        };
        let switcher = JobSwitcher::new(settings, services(&host), &fixtures::catalog_source());

        let mut class_commands: usize = 0;
        for registration in switcher.registry().registrations() {
            let CommandTarget::ClassJob(id) = registration.target else {
                continue;
            };
            let entry = resolve_exact(&catalog, &affixes, &registration.command).unwrap();
            assert_eq!(entry.id, id, "{}", registration.command);
            class_commands = class_commands.saturating_add(1);
        }
        // 14 registrable rows in both casings
        assert_eq!(class_commands, 28);

        let gla = affixes.apply("gla");
        let whm = affixes.apply("whm").to_uppercase();
        assert_eq!(
            switcher.registry().get(&gla).map(|r| r.target),
            Some(CommandTarget::ClassJob(fixtures::GLADIATOR))
        );
        assert_eq!(
            switcher.registry().get(&whm).map(|r| r.target),
            Some(CommandTarget::ClassJob(fixtures::WHITE_MAGE))
        );
    }
}
