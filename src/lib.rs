//! # flag-quiz
//!
//! A country-flag quiz round engine, distilled from a flag-guessing app
//! into a UI-free library.
//!
//! ## Design Principles
//!
//! 1. **One Resolution Path**: The four game modes share a single tagged
//!    `RoundState` and one set of resolution rules instead of per-screen
//!    duplicates.
//!
//! 2. **Graceful Degradation**: No operation is fatal. Unknown codes
//!    resolve to a fallback entry, missing flag assets to a default image,
//!    and a failed catalog load to an empty catalog.
//!
//! 3. **Explicit Configuration**: Timer, attempt threshold, and target
//!    count are `RoundConfig` values passed in at construction, never
//!    ambient globals.
//!
//! 4. **Deterministic Rounds**: Target selection runs on a seeded,
//!    per-round-forked RNG, so any session replays from one seed.
//!
//! ## Modules
//!
//! - `core`: RNG and round configuration
//! - `catalog`: Country entries, storage, and image resolution
//! - `round`: Modes, masks, round state, and the engine
//! - `session`: Multi-round "Next" flow with a running score

pub mod catalog;
pub mod core;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::catalog::{Catalog, CatalogError, CountryCode, CountryEntry, ImageRef, ImageResolver};
pub use crate::core::{QuizRng, RoundConfig};
pub use crate::round::{Answer, Countdown, Mode, NameMask, Outcome, RoundEngine, RoundState};
pub use crate::session::{QuizSession, Score};
