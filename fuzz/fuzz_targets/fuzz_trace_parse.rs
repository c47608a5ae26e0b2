#![no_main]

use libfuzzer_sys::fuzz_target;
use relist_harness::{HarnessConfig, TraceFile, replay};

fuzz_target!(|data: &[u8]| {
    let Ok(trace) = serde_json::from_slice::<TraceFile>(data) else {
        return;
    };
    if let Ok(report) = replay(&trace, &HarnessConfig::default()) {
        assert_eq!(report.listeners_after_destroy, 0);
        assert_eq!(report.order.len(), report.labels.len());
    }
});
