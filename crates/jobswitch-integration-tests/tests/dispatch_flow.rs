//! Integration tests for routed commands: catalogs from disk, gearset
//! selection and phantom-job search through the mock host.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use jobswitch_core::{EntryId, FileCatalogSource, GatewayError, MatchTier, ZoneUse};
use jobswitch_plugin::{HostServices, JobSwitcher, Switched, SwitcherSettings};
use jobswitch_test::{MockCommandHost, MockGateway, MockNotifier, fixtures};

struct Host {
    commands: Arc<MockCommandHost>,
    notifier: Arc<MockNotifier>,
    gateway: Arc<MockGateway>,
}

impl Host {
    fn new(gateway: MockGateway) -> Self {
        Self {
            commands: Arc::new(MockCommandHost::new()),
            notifier: Arc::new(MockNotifier::new()),
            gateway: Arc::new(gateway),
        }
    }

    fn load(&self, catalog_dir: &Path) -> JobSwitcher {
        let services = HostServices::new(
            self.commands.clone(),
            self.notifier.clone(),
            self.gateway.clone(),
        );
        JobSwitcher::new(
            SwitcherSettings::default(),
            services,
            &FileCatalogSource::new(catalog_dir),
        )
    }
}

fn bundled_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn test_bundled_catalogs_register() {
    let host = Host::new(MockGateway::new());
    let switcher = host.load(&bundled_data());

    assert!(host.commands.contains("/PLD"));
    assert!(host.commands.contains("/pct"));
    assert!(host.commands.contains("/pj"));
    assert!(!host.commands.contains("/ADV"));
    assert_eq!(switcher.phantom_jobs().map(|c| c.len()), Some(13));
}

#[test]
fn test_best_gearset_skips_stale_rows() {
    let gateway = MockGateway::new()
        .with_slots([
            fixtures::slot(0, fixtures::WARRIOR, 640),
            fixtures::slot(1, fixtures::WARRIOR, 700),
            fixtures::empty_slot(2),
        ])
        // a row whose stored index disagrees with its position
        .with_slot_at(3, fixtures::slot(7, fixtures::WARRIOR, 730));
    let host = Host::new(gateway);
    let switcher = host.load(&bundled_data());

    let Some(Switched::ClassJob { slot, .. }) = switcher.on_command("/war", "") else {
        panic!("expected a gearset switch");
    };
    assert_eq!(slot.index, 1);
    assert_eq!(host.gateway.equipped(), vec![1]);
}

#[test]
fn test_equal_item_levels_keep_first_slot() {
    let gateway = MockGateway::new().with_slots([
        fixtures::slot(4, fixtures::PALADIN, 710),
        fixtures::slot(9, fixtures::PALADIN, 710),
    ]);
    let host = Host::new(gateway);
    let switcher = host.load(&bundled_data());

    switcher.on_command("/PLD", "").unwrap();
    assert_eq!(host.gateway.equipped(), vec![4]);
}

#[test]
fn test_equip_failure_reported() {
    let gateway = MockGateway::new()
        .with_slots([fixtures::slot(0, fixtures::PALADIN, 700)])
        .failing_equip("gearset change is locked");
    let host = Host::new(gateway);
    let switcher = host.load(&bundled_data());
    let before = host.commands.commands();

    assert!(switcher.on_command("/pld", "").is_none());
    assert_eq!(
        host.notifier.errors(),
        vec![
            "JobSwitch: Failed to equip gearset: host rejected the request: gearset change is locked"
                .to_string()
        ]
    );
    assert_eq!(host.commands.commands(), before);
}

#[test]
fn test_phantom_search_tiers() {
    let host = Host::new(MockGateway::new().with_zone(ZoneUse::OCCULT_CRESCENT));
    let switcher = host.load(&bundled_data());

    let cases = [
        ("time mage", EntryId(8), MatchTier::Substring),
        ("ナイト", EntryId(1), MatchTier::Substring),
        ("cnr", EntryId(9), MatchTier::Subsequence),
        ("  Oracle ", EntryId(11), MatchTier::Substring),
    ];
    for (query, id, expected_tier) in cases {
        let Some(Switched::PhantomJob { entry, tier, .. }) = switcher.on_command("/pj", query)
        else {
            panic!("no match for {query}");
        };
        assert_eq!(entry.id, id, "query {query}");
        assert_eq!(tier, expected_tier, "query {query}");
    }
    assert_eq!(
        host.gateway.selected(),
        vec![EntryId(8), EntryId(1), EntryId(9), EntryId(11)]
    );
    assert!(host.notifier.errors().is_empty());
}

#[test]
fn test_phantom_search_no_match() {
    let host = Host::new(MockGateway::new().with_zone(ZoneUse::OCCULT_CRESCENT));
    let switcher = host.load(&bundled_data());

    assert!(switcher.on_command("/pj", "zzz").is_none());
    assert_eq!(
        host.notifier.errors(),
        vec!["JobSwitch: No Phantom Job found matching: zzz".to_string()]
    );
    assert!(host.gateway.selected().is_empty());
}

#[test]
fn test_phantom_agent_unavailable() {
    let gateway = MockGateway::new()
        .with_zone(ZoneUse::OCCULT_CRESCENT)
        .failing_select(GatewayError::AgentUnavailable("support job agent".to_string()));
    let host = Host::new(gateway);
    let switcher = host.load(&bundled_data());

    assert!(switcher.on_command("/PJ", "thief").is_none());
    assert_eq!(host.gateway.selected(), vec![EntryId(12)]);
    assert_eq!(host.notifier.errors().len(), 1);
}

#[test]
fn test_json_catalog_wins_over_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("class_jobs.json"),
        serde_json::json!([
            {"id": 19, "name": "paladin", "acronym": "PLD"},
            {"id": 20, "name": "monk", "acronym": "MNK"}
        ])
        .to_string(),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("class_jobs.toml"),
        "[[entries]]\nid = 21\nname = \"warrior\"\nacronym = \"WAR\"\n",
    )
    .unwrap();

    let host = Host::new(MockGateway::new());
    let switcher = host.load(dir.path());

    assert!(host.commands.contains("/MNK"));
    assert!(!host.commands.contains("/WAR"));
    // no phantom catalog on disk
    assert!(switcher.phantom_jobs().is_none());
    assert!(!host.commands.contains("/pj"));
}

#[test]
fn test_malformed_catalog_degrades() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("class_jobs.json"), "not json").unwrap();
    std::fs::copy(
        bundled_data().join("phantom_jobs.toml"),
        dir.path().join("phantom_jobs.toml"),
    )
    .unwrap();

    let host = Host::new(MockGateway::new());
    let switcher = host.load(dir.path());

    assert!(switcher.class_jobs().is_none());
    assert_eq!(host.commands.commands(), vec!["/PJ".to_string(), "/pj".to_string()]);
}
