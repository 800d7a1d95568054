//! Round configuration.
//!
//! The engine never reads ambient global state: everything that used to be a
//! process-wide switch (the countdown toggle in particular) is an explicit
//! value here, passed in when the engine is built.

use serde::{Deserialize, Serialize};

/// Wrong-attempt threshold shared by the hint and advanced modes.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default countdown length, in ticks (one tick per second).
pub const DEFAULT_ROUND_TICKS: u32 = 10;

/// Number of simultaneous targets in the advanced mode.
pub const ADVANCED_TARGETS: usize = 3;

/// Configuration for round behavior.
///
/// ## Example
///
/// ```
/// use flag_quiz::core::RoundConfig;
///
/// let config = RoundConfig::new().with_timer(15);
/// assert!(config.timer_enabled);
/// assert_eq!(config.round_ticks, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Whether rounds run under a countdown deadline.
    pub timer_enabled: bool,

    /// Countdown length in ticks when the timer is enabled.
    pub round_ticks: u32,

    /// Wrong attempts before a round resolves Incorrect
    /// (hint and advanced modes).
    pub max_attempts: u32,

    /// Targets selected for an advanced round.
    pub advanced_targets: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            timer_enabled: false,
            round_ticks: DEFAULT_ROUND_TICKS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            advanced_targets: ADVANCED_TARGETS,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with defaults (timer off, 3 attempts).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the countdown with the given length in ticks.
    #[must_use]
    pub fn with_timer(mut self, ticks: u32) -> Self {
        assert!(ticks > 0, "Countdown must be at least 1 tick");
        self.timer_enabled = true;
        self.round_ticks = ticks;
        self
    }

    /// Set the wrong-attempt threshold.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = attempts;
        self
    }
}
