#![forbid(unsafe_code)]

use std::fmt;
use std::io;

use relist_widgets::ConfigError;

/// Failures surfaced by the harness binary.
#[derive(Debug)]
pub enum HarnessError {
    /// Reading the trace failed.
    Io(io::Error),
    /// The trace is not valid JSON for [`TraceFile`](crate::trace::TraceFile).
    Json(serde_json::Error),
    /// The trace (or an override) produced an invalid list configuration.
    Config(ConfigError),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(source) => write!(f, "failed to read trace: {source}"),
            Self::Json(source) => write!(f, "invalid trace: {source}"),
            Self::Config(source) => write!(f, "invalid list configuration: {source}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Json(source) => Some(source),
            Self::Config(source) => Some(source),
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(source: io::Error) -> Self {
        Self::Io(source)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source)
    }
}

impl From<ConfigError> for HarnessError {
    fn from(source: ConfigError) -> Self {
        Self::Config(source)
    }
}
