#![forbid(unsafe_code)]

//! Trace replay.

use relist_core::geometry::Rect;
use relist_core::surface::Surfaces;
use relist_widgets::{DragState, ListOrder, ListOutcome, SortableList, SortableListConfig};
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::trace::TraceFile;

/// Summary of one replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Committed order after the last event.
    pub order: ListOrder,
    /// Labels in committed order.
    pub labels: Vec<String>,
    /// Events fed to the list.
    pub events: usize,
    /// Drops that moved an item plus deletions.
    pub order_changes: usize,
    /// Whether a drag was still active after the last event.
    pub dragging_at_end: bool,
    /// Shared-surface listeners still registered after teardown.
    pub listeners_after_destroy: usize,
}

/// Replay `trace`, applying any overrides from `config`.
pub fn replay(trace: &TraceFile, config: &HarnessConfig) -> Result<ReplayReport, HarnessError> {
    let list_config = SortableListConfig::default().with_proximity_threshold(
        config
            .threshold
            .or(trace.threshold)
            .unwrap_or(relist_widgets::DEFAULT_PROXIMITY_THRESHOLD),
    );
    let width = config.width.unwrap_or(trace.width);

    let surfaces = Surfaces::new();
    let mut list = SortableList::with_config(
        trace.items.iter().map(|item| item.to_list_item()),
        Rect::new(0, 0, width, 0),
        &surfaces,
        list_config,
    )?;

    let mut order_changes = 0;
    for (step, event) in trace.events.iter().enumerate() {
        let outcome = list.handle_event(&event.to_event());
        if outcome.order_changed() {
            order_changes += 1;
        }
        if outcome != ListOutcome::Ignored {
            tracing::info!(step, outcome = ?outcome, "replay step");
        }
    }

    let dragging_at_end = list.state() == DragState::Dragging;
    if dragging_at_end {
        tracing::warn!("trace ended mid-drag; destroying cancels it");
    }

    list.destroy();
    let order = list.snapshot();
    let labels = list.items().map(|item| item.label().to_owned()).collect();

    Ok(ReplayReport {
        order,
        labels,
        events: trace.events.len(),
        order_changes,
        dragging_at_end,
        listeners_after_destroy: surfaces.input.total_listeners(),
    })
}
