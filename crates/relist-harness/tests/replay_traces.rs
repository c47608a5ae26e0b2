//! Replays the bundled traces and checks the reports.

use std::fs;
use std::path::PathBuf;

use relist_harness::{HarnessConfig, HarnessError, TraceEvent, TraceFile, TraceItem, replay};
use relist_widgets::ItemId;

fn load(name: &str) -> TraceFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("traces")
        .join(name);
    let raw = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    serde_json::from_str(&raw).expect("valid trace")
}

fn ids(raw: &[u64]) -> Vec<ItemId> {
    raw.iter().copied().map(ItemId::new).collect()
}

#[test]
fn reorder_trace_commits_drop_and_delete() {
    let report = replay(&load("reorder.json"), &HarnessConfig::default()).expect("replay");
    assert_eq!(report.order.ids(), ids(&[2, 3, 1]).as_slice());
    assert_eq!(report.labels, vec!["Bravo", "Charlie", "Alpha"]);
    assert_eq!(report.events, 6);
    assert_eq!(report.order_changes, 2);
    assert!(!report.dragging_at_end);
    assert_eq!(report.listeners_after_destroy, 0);
}

#[test]
fn abandoned_drag_is_cancelled_on_teardown() {
    let report = replay(&load("abandoned.json"), &HarnessConfig::default()).expect("replay");
    assert!(report.dragging_at_end);
    assert_eq!(report.order.ids(), ids(&[10, 11, 12]).as_slice());
    assert_eq!(report.order_changes, 0);
    assert_eq!(report.listeners_after_destroy, 0);
}

#[test]
fn threshold_override_changes_outcome() {
    // Dragged bottom lands exactly 5 below the previous sibling's bottom:
    // no swap at the default threshold, a swap once the threshold is 6.
    let trace = TraceFile {
        width: 100,
        threshold: None,
        items: (1..=3)
            .map(|id| TraceItem {
                id,
                height: 20,
                label: String::new(),
                grab: Some([0, 0, 10, 20]),
                delete: None,
            })
            .collect(),
        events: vec![
            TraceEvent::Down { x: 5, y: 30 },
            TraceEvent::Move { x: 5, y: 15 },
            TraceEvent::Up { x: 5, y: 15 },
        ],
    };

    let default = replay(&trace, &HarnessConfig::default()).expect("replay");
    assert_eq!(default.order.ids(), ids(&[1, 2, 3]).as_slice());

    let config = HarnessConfig {
        threshold: Some(6),
        ..HarnessConfig::default()
    };
    let wider = replay(&trace, &config).expect("replay");
    assert_eq!(wider.order.ids(), ids(&[2, 1, 3]).as_slice());
}

#[test]
fn negative_threshold_is_a_config_error() {
    let mut trace = load("reorder.json");
    trace.threshold = Some(-1);
    let err = replay(&trace, &HarnessConfig::default()).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
    assert!(err.to_string().starts_with("invalid list configuration"));
}

#[test]
fn report_serializes_to_json() {
    let report = replay(&load("reorder.json"), &HarnessConfig::default()).expect("replay");
    let value: serde_json::Value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["order"]["ids"], serde_json::json!([2, 3, 1]));
    assert_eq!(value["dragging_at_end"], serde_json::json!(false));
}
