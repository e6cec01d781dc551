//! Application configuration.
//!
//! Use the builder methods to customize delays and validation limits, or
//! [`AppConfig::from_env`] to pick up overrides from the environment.

use std::time::Duration;

/// Environment variable overriding the simulated content fetch delay.
pub const LOAD_DELAY_ENV: &str = "QUILL_LOAD_DELAY_MS";

/// Environment variable overriding the simulated session check delay.
pub const SESSION_DELAY_ENV: &str = "QUILL_SESSION_DELAY_MS";

/// Configuration for the stores and their simulated backend.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use quill::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_load_delay(Duration::ZERO)
///     .with_min_content_chars(10);
/// assert_eq!(config.min_content_chars, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated delay before the initial posts arrive (default: 500ms)
    pub load_delay: Duration,
    /// Simulated delay before the session check resolves (default: none)
    pub session_delay: Duration,
    /// Minimum post title length in characters, after trimming (default: 5)
    pub min_title_chars: usize,
    /// Minimum post content length in characters, after trimming (default: 50)
    pub min_content_chars: usize,
    /// Capacity of the content update channel (default: 64)
    pub event_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(500),
            session_delay: Duration::ZERO,
            min_title_chars: 5,
            min_content_chars: 50,
            event_capacity: 64,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated content fetch delay.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Set the simulated session check delay.
    pub fn with_session_delay(mut self, delay: Duration) -> Self {
        self.session_delay = delay;
        self
    }

    /// Set the minimum title length.
    pub fn with_min_title_chars(mut self, chars: usize) -> Self {
        self.min_title_chars = chars;
        self
    }

    /// Set the minimum content length.
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }

    /// Set the content update channel capacity (clamped to at least 1).
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Create config from defaults plus `QUILL_*` environment overrides.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(delay) = duration_from_env(LOAD_DELAY_ENV) {
            config.load_delay = delay;
        }
        if let Some(delay) = duration_from_env(SESSION_DELAY_ENV) {
            config.session_delay = delay;
        }
        config
    }
}

fn duration_from_env(key: &str) -> Option<Duration> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            tracing::warn!("ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
