//! Round system: modes, masks, state, and the engine.
//!
//! ## Key Types
//!
//! - `Mode`: The four game modes
//! - `Answer`: Tagged answer shapes (name, letter, three names)
//! - `NameMask`: Per-character reveal state for the hint mode
//! - `RoundState` / `Outcome` / `Countdown`: One round's state
//! - `RoundEngine`: Applies answers and ticks to round state
//!
//! ## State Machine
//!
//! `Pending -> {Correct, Incorrect}`, terminal once resolved. A new round
//! comes only from `RoundEngine::start_round`.

pub mod engine;
pub mod mask;
pub mod mode;
pub mod state;

pub use engine::RoundEngine;
pub use mask::NameMask;
pub use mode::{Answer, Mode};
pub use state::{Countdown, Outcome, RoundState};
