#![forbid(unsafe_code)]

//! Log subscriber setup for relist hosts.
//!
//! Library code logs through `tracing` behind `#[cfg(feature = "tracing")]`
//! and never installs a subscriber. Binaries enable `tracing-json` and call
//! [`init`] once at startup; the filter is read from `RELIST_LOG`.

/// Environment variable consulted for the log filter.
pub const LOG_ENV: &str = "RELIST_LOG";

/// Default filter when `RELIST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to stderr, as newline-delimited
/// JSON when `json` is set and as plain text otherwise.
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init(json: bool) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::init;

    #[test]
    fn second_init_is_refused() {
        assert!(init(true));
        assert!(!init(false));
        tracing::info!(message = "logging.ready");
    }
}
