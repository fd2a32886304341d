use std::collections::BTreeMap;

use lamague_core::config::LedgerConfig;
use lamague_ledger::{AuditReport, EnergyLedger, LedgerContext};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct SpikeScenario {
    operations: Vec<ScenarioOperation>,
    expected_total: f64,
    expected_spike_indices: Vec<usize>,
}

#[derive(Deserialize)]
struct ScenarioOperation {
    amount: f64,
    operation: String,
}

fn ctx(pairs: &[(&str, serde_json::Value)]) -> LedgerContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn cumulative_total_tracks_each_spend() {
    let mut ledger = EnergyLedger::new();
    ledger.spend(5.0, "first", LedgerContext::new());
    let second = ledger.spend(3.0, "second", ctx(&[("note", json!("tail"))]));
    assert_eq!(second.cumulative, 8.0);
    assert_eq!(second.operation, "second");
    assert_eq!(second.context["note"], json!("tail"));

    assert_eq!(ledger.total_energy(), 8.0);
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.entries()[0].cumulative, 5.0);
}

#[test]
fn entries_are_timestamped_in_order() {
    let mut ledger = EnergyLedger::new();
    ledger.spend(1.0, "a", LedgerContext::new());
    ledger.spend(1.0, "b", LedgerContext::new());
    let entries = ledger.entries();
    assert!(entries[0].timestamp <= entries[1].timestamp);
}

#[test]
fn negative_amounts_are_accepted() {
    let mut ledger = EnergyLedger::new();
    ledger.spend(5.0, "spend", LedgerContext::new());
    let credit = ledger.spend(-2.0, "credit", LedgerContext::new());
    assert_eq!(credit.cumulative, 3.0);
    assert_eq!(ledger.total_energy(), 3.0);
}

#[test]
fn empty_and_single_entry_ledgers_have_no_violations() {
    let mut ledger = EnergyLedger::new();
    assert!(ledger.is_empty());
    assert!(ledger.detect_violations().is_empty());

    ledger.spend(1_000_000.0, "huge", LedgerContext::new());
    assert!(ledger.detect_violations().is_empty());
}

#[test]
fn fixture_spike_is_reported_in_audit() {
    let scenario: SpikeScenario = test_fixtures::load_fixture("ledger/spike_scenario.json");
    let mut ledger = EnergyLedger::new();
    for op in &scenario.operations {
        ledger.spend(op.amount, op.operation.clone(), BTreeMap::new());
    }

    let report = ledger.audit();
    assert!((report.total_energy - scenario.expected_total).abs() < 1e-9);
    assert_eq!(report.num_operations, scenario.operations.len());
    assert_eq!(report.operations.len(), scenario.operations.len());
    assert_eq!(report.violations.len(), scenario.expected_spike_indices.len());
    assert_eq!(
        report.violations[0],
        "Operation 20: Unusual energy spike (250.00)"
    );

    let indices: Vec<usize> = ledger.detect_spikes().iter().map(|s| s.index).collect();
    assert_eq!(indices, scenario.expected_spike_indices);
}

#[test]
fn detection_does_not_mutate_the_log() {
    let scenario: SpikeScenario = test_fixtures::load_fixture("ledger/spike_scenario.json");
    let mut ledger = EnergyLedger::new();
    for op in &scenario.operations {
        ledger.spend(op.amount, op.operation.clone(), BTreeMap::new());
    }
    let before = ledger.entries().to_vec();
    let _ = ledger.detect_violations();
    let _ = ledger.audit();
    assert_eq!(ledger.entries(), &before[..]);
}

#[test]
fn tighter_sigma_flags_more_entries() {
    let mut ledger = EnergyLedger::with_config(&LedgerConfig {
        spike_sigma: 0.5,
        ..LedgerConfig::default()
    });
    for amount in [1.0, 1.0, 1.0, 2.0, 5.0] {
        ledger.spend(amount, "op", LedgerContext::new());
    }
    // mean 2.0, stddev_pop ≈ 1.549, limit ≈ 2.77
    assert_eq!(ledger.detect_violations().len(), 1);
}

#[test]
fn audit_exports_as_json() {
    let mut ledger = EnergyLedger::new();
    ledger.spend(
        2.5,
        "cascade_reorganization",
        ctx(&[("new_block", json!("Special relativity")), ("old_foundation_size", json!(1))]),
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("audit.json");
    ledger.export_json(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["total_energy"], json!(2.5));
    assert_eq!(value["num_operations"], json!(1));
    assert_eq!(value["operations"][0]["operation"], json!("cascade_reorganization"));
    assert_eq!(value["operations"][0]["context"]["old_foundation_size"], json!(1));
    assert_eq!(value["violations"], json!([]));

    let back: AuditReport = serde_json::from_str(&written).unwrap();
    assert_eq!(back.num_operations, 1);
    assert!(!back.has_violations());
}

#[test]
fn export_to_missing_directory_fails() {
    let ledger = EnergyLedger::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("audit.json");
    assert!(ledger.export_json(&path).is_err());
}
