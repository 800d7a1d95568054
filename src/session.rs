//! Multi-round session driver.
//!
//! Wraps the round engine with the "Next" flow of the original app: one
//! active round per session, replaced on advance, with a running score
//! updated exactly once per resolved round.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::RoundConfig;
use crate::round::{Answer, Mode, Outcome, RoundEngine, RoundState};

/// Running tally across rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds resolved Correct.
    pub correct: u32,
    /// Rounds resolved Incorrect.
    pub incorrect: u32,
    /// Total rounds resolved (abandoned rounds are not counted).
    pub rounds_played: u32,
}

/// A quiz session: one active round at a time plus the score.
///
/// ## Example
///
/// ```
/// use flag_quiz::catalog::Catalog;
/// use flag_quiz::core::RoundConfig;
/// use flag_quiz::round::{Answer, Mode, Outcome};
/// use flag_quiz::session::QuizSession;
///
/// let mut session = QuizSession::new(Catalog::bundled(), RoundConfig::new(), 42);
///
/// session.begin(Mode::GuessCountry);
/// session.submit(&Answer::name("not a country"));
///
/// assert_eq!(session.score().incorrect, 1);
/// session.next(); // fresh round, same mode
/// assert!(!session.current().unwrap().is_resolved());
/// ```
#[derive(Clone, Debug)]
pub struct QuizSession {
    engine: RoundEngine,
    current: Option<RoundState>,
    scored: bool,
    score: Score,
}

impl QuizSession {
    /// Create a session over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog, config: RoundConfig, seed: u64) -> Self {
        Self {
            engine: RoundEngine::new(catalog, config, seed),
            current: None,
            scored: false,
            score: Score::default(),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// The active round, if one has started.
    #[must_use]
    pub fn current(&self) -> Option<&RoundState> {
        self.current.as_ref()
    }

    /// The running score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Start a round of the given mode, replacing any active round.
    ///
    /// An unresolved active round is abandoned without scoring.
    pub fn begin(&mut self, mode: Mode) -> &RoundState {
        let round = self.engine.start_round(mode);
        self.scored = false;
        self.current.insert(round)
    }

    /// Advance to a fresh round of the same mode.
    ///
    /// Returns `None` when no round has ever started.
    pub fn next(&mut self) -> Option<&RoundState> {
        let mode = self.current.as_ref()?.mode;
        Some(self.begin(mode))
    }

    /// Submit an answer to the active round.
    ///
    /// Returns the round's outcome, or `None` when no round is active.
    pub fn submit(&mut self, answer: &Answer) -> Option<Outcome> {
        let round = self.current.as_mut()?;
        self.engine.submit(round, answer);
        let outcome = round.outcome();
        self.settle();
        Some(outcome)
    }

    /// Record the latest entered-but-unsubmitted answer.
    pub fn set_draft(&mut self, answer: Answer) {
        if let Some(round) = self.current.as_mut() {
            self.engine.set_draft(round, answer);
        }
    }

    /// Advance the active round's countdown by one tick.
    ///
    /// Returns the round's outcome, or `None` when no round is active.
    pub fn tick(&mut self) -> Option<Outcome> {
        let round = self.current.as_mut()?;
        self.engine.tick(round);
        let outcome = round.outcome();
        self.settle();
        Some(outcome)
    }

    /// Fold a freshly resolved round into the score, once.
    fn settle(&mut self) {
        if self.scored {
            return;
        }
        let Some(round) = self.current.as_ref() else {
            return;
        };
        match round.outcome() {
            Outcome::Pending => {}
            Outcome::Correct => {
                self.score.correct += 1;
                self.score.rounds_played += 1;
                self.scored = true;
            }
            Outcome::Incorrect => {
                self.score.incorrect += 1;
                self.score.rounds_played += 1;
                self.scored = true;
            }
        }
    }
}
