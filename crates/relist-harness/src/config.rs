#![forbid(unsafe_code)]

//! Environment-driven harness configuration.
//!
//! | variable                   | meaning                                   |
//! |----------------------------|-------------------------------------------|
//! | `RELIST_HARNESS_TRACE`     | trace file path; stdin when unset         |
//! | `RELIST_HARNESS_WIDTH`     | overrides the trace's root width          |
//! | `RELIST_HARNESS_THRESHOLD` | overrides the proximity threshold         |
//! | `RELIST_HARNESS_FORMAT`    | `text` (default) or `json`                |
//! | `RELIST_HARNESS_LOG_JSON`  | `1`/`true` for JSON log lines             |
//! | `RELIST_LOG`               | `tracing` env filter (default `info`)     |
//!
//! Unparseable numeric values are ignored rather than rejected.

use std::path::PathBuf;

/// How the final report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    pub trace_path: Option<PathBuf>,
    pub width: Option<i32>,
    pub threshold: Option<i32>,
    pub format: OutputFormat,
    pub log_json: bool,
}

impl HarnessConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let trace_path = lookup("RELIST_HARNESS_TRACE")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let width = lookup("RELIST_HARNESS_WIDTH").and_then(|value| value.parse::<i32>().ok());

        let threshold =
            lookup("RELIST_HARNESS_THRESHOLD").and_then(|value| value.parse::<i32>().ok());

        let format = match lookup("RELIST_HARNESS_FORMAT")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        let log_json = lookup("RELIST_HARNESS_LOG_JSON")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

        Self {
            trace_path,
            width,
            threshold,
            format,
            log_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(HarnessConfig::from_lookup(|_| None), HarnessConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("RELIST_HARNESS_TRACE", "traces/basic.json"),
            ("RELIST_HARNESS_WIDTH", "240"),
            ("RELIST_HARNESS_THRESHOLD", "3"),
            ("RELIST_HARNESS_FORMAT", "JSON"),
            ("RELIST_HARNESS_LOG_JSON", "true"),
        ]));
        assert_eq!(config.trace_path, Some(PathBuf::from("traces/basic.json")));
        assert_eq!(config.width, Some(240));
        assert_eq!(config.threshold, Some(3));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.log_json);
    }

    #[test]
    fn bad_numbers_are_ignored() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("RELIST_HARNESS_WIDTH", "wide"),
            ("RELIST_HARNESS_THRESHOLD", ""),
            ("RELIST_HARNESS_TRACE", ""),
        ]));
        assert_eq!(config.width, None);
        assert_eq!(config.threshold, None);
        assert_eq!(config.trace_path, None);
    }
}
