#![forbid(unsafe_code)]

//! Replay a pointer trace against a sortable list.
//!
//! # Running
//!
//! ```sh
//! RELIST_HARNESS_TRACE=crates/relist-harness/traces/reorder.json \
//!     cargo run -p relist-harness
//! ```
//!
//! See [`relist_harness::config`] for the environment variables.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use relist_harness::{HarnessConfig, HarnessError, OutputFormat, TraceFile, replay};

fn read_trace(config: &HarnessConfig) -> Result<TraceFile, HarnessError> {
    let raw = match &config.trace_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run(config: &HarnessConfig) -> Result<(), HarnessError> {
    let trace = read_trace(config)?;
    let report = replay(&trace, config)?;
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for (index, (id, label)) in report.order.ids().iter().zip(&report.labels).enumerate() {
                println!("{index:>3}  {:<6} {label}", id.to_string());
            }
            println!(
                "events={} order_changes={} dragging_at_end={}",
                report.events, report.order_changes, report.dragging_at_end
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = HarnessConfig::from_env();
    relist_core::logging::init(config.log_json);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "replay failed");
            eprintln!("relist-harness: {err}");
            ExitCode::FAILURE
        }
    }
}
