//! Round state: one round from target selection to resolved outcome.
//!
//! `RoundState` is created by the engine, mutated only through engine
//! operations, and replaced (never reset) when the next round starts.
//! The countdown is owned by the round, so leaving the round drops the
//! timer with it and no tick can fire against a discarded round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::CountryCode;
use super::mask::NameMask;
use super::mode::{Answer, Mode};

/// Terminal classification of a round.
///
/// `Pending -> {Correct, Incorrect}`, terminal once resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Pending,
    Correct,
    Incorrect,
}

/// Countdown deadline, decremented one tick at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    /// Create a countdown with the given number of ticks.
    #[must_use]
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Remaining ticks.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Decrement by one tick, saturating at zero.
    pub(crate) fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

/// State of one quiz round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// The mode this round plays.
    pub mode: Mode,

    /// Target codes, 1 for most modes, 3 for the advanced mode.
    pub(crate) targets: SmallVec<[CountryCode; 3]>,

    /// Masked name, hint mode only.
    pub(crate) mask: Option<NameMask>,

    /// Per-target match locks for the advanced mode. A slot that matched
    /// once stays matched.
    pub(crate) matched: SmallVec<[bool; 3]>,

    /// Wrong attempts so far.
    pub(crate) attempts: u32,

    /// Optional countdown deadline.
    pub(crate) deadline: Option<Countdown>,

    /// Current classification.
    pub(crate) outcome: Outcome,

    /// Latest entered-but-unsubmitted answer, applied when the deadline
    /// expires.
    pub(crate) draft: Option<Answer>,
}

impl RoundState {
    pub(crate) fn new(
        mode: Mode,
        targets: SmallVec<[CountryCode; 3]>,
        mask: Option<NameMask>,
        deadline: Option<Countdown>,
    ) -> Self {
        let matched = targets.iter().map(|_| false).collect();
        Self {
            mode,
            targets,
            mask,
            matched,
            attempts: 0,
            deadline,
            outcome: Outcome::Pending,
            draft: None,
        }
    }

    /// Target codes in display order.
    #[must_use]
    pub fn targets(&self) -> &[CountryCode] {
        &self.targets
    }

    /// The primary target (the only one outside the advanced mode).
    #[must_use]
    pub fn target(&self) -> &CountryCode {
        &self.targets[0]
    }

    /// The mask, hint mode only.
    #[must_use]
    pub fn mask(&self) -> Option<&NameMask> {
        self.mask.as_ref()
    }

    /// Which advanced-mode slots have matched so far.
    #[must_use]
    pub fn matched(&self) -> &[bool] {
        &self.matched
    }

    /// Wrong attempts so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The countdown, when the round runs under a deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<&Countdown> {
        self.deadline.as_ref()
    }

    /// Current classification.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the outcome has left `Pending`.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    /// Latest entered-but-unsubmitted answer.
    #[must_use]
    pub fn draft(&self) -> Option<&Answer> {
        self.draft.as_ref()
    }
}
