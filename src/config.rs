use std::time::Duration;

pub const ENV_SOURCE_URL: &str = "SHEET_CSV_URL";
pub const ENV_FETCH_TIMEOUT: &str = "FETCH_TIMEOUT_SECS";

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Published CSV export of the sheet. Blank is kept as-is so the load
    /// reports the configuration problem in the UI.
    pub source_url: String,
    /// `None` means the fetch waits for the transport indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        // Real environment variables take precedence over .env entries.
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let source_url = lookup(ENV_SOURCE_URL)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let fetch_timeout = lookup(ENV_FETCH_TIMEOUT).and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    log::warn!("Ignoring {ENV_FETCH_TIMEOUT}={raw:?}: expected a positive integer");
                    None
                }
            }
        });

        Config {
            source_url,
            fetch_timeout,
        }
    }
}
