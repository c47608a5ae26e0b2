#![forbid(unsafe_code)]

//! Replay harness for relist.
//!
//! Reads a JSON pointer trace (items plus an event script), drives a
//! [`SortableList`](relist_widgets::SortableList) through it, and reports the
//! committed order. Used for manual reproduction of drag bugs and as a
//! fixture runner in integration tests.

pub mod config;
pub mod error;
pub mod replay;
pub mod trace;

pub use config::{HarnessConfig, OutputFormat};
pub use error::HarnessError;
pub use replay::{ReplayReport, replay};
pub use trace::{TraceEvent, TraceFile, TraceItem};
