//! Core engine types: RNG and round configuration.
//!
//! Everything here is mode-agnostic. The round engine is configured via
//! `RoundConfig` rather than reading ambient state.

pub mod config;
pub mod rng;

pub use config::{RoundConfig, ADVANCED_TARGETS, DEFAULT_MAX_ATTEMPTS, DEFAULT_ROUND_TICKS};
pub use rng::QuizRng;
