//! The round engine: drives one round of one mode to a terminal outcome.
//!
//! All mode resolution rules live here, in one match per operation. The
//! engine owns the catalog, the configuration, and the RNG; rounds are
//! plain values handed back to the caller and mutated only through
//! `submit`, `set_draft`, and `tick`.
//!
//! ## Failure Semantics
//!
//! No operation is fatal. Unknown codes resolve to the catalog's fallback
//! entry, an empty catalog produces a fallback-only round, and answers of
//! the wrong shape count as plain misses. Operations on a resolved round
//! are no-ops.

use smallvec::SmallVec;

use crate::catalog::{Catalog, CountryCode};
use crate::core::{QuizRng, RoundConfig};
use super::mask::NameMask;
use super::mode::{Answer, Mode};
use super::state::{Countdown, Outcome, RoundState};

/// Drives rounds of all four modes.
///
/// ## Example
///
/// ```
/// use flag_quiz::catalog::Catalog;
/// use flag_quiz::core::RoundConfig;
/// use flag_quiz::round::{Answer, Mode, Outcome, RoundEngine};
///
/// let mut engine = RoundEngine::new(Catalog::bundled(), RoundConfig::new(), 42);
///
/// let mut round = engine.start_round(Mode::GuessCountry);
/// let target_name = engine.catalog().resolve(round.target()).name.clone();
///
/// engine.submit(&mut round, &Answer::name(target_name));
/// assert_eq!(round.outcome(), Outcome::Correct);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    catalog: Catalog,
    config: RoundConfig,
    rng: QuizRng,
}

impl RoundEngine {
    /// Create an engine over a catalog with the given configuration and
    /// RNG seed.
    #[must_use]
    pub fn new(catalog: Catalog, config: RoundConfig, seed: u64) -> Self {
        Self {
            catalog,
            config,
            rng: QuizRng::new(seed),
        }
    }

    /// The engine's catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Start a fresh round of the given mode.
    ///
    /// Targets are selected uniform-randomly without replacement, from an
    /// RNG stream forked per round: the Nth round of a seed draws the same
    /// targets no matter which modes came before it. When the catalog has
    /// fewer entries than the mode needs (including the empty catalog),
    /// the remaining slots target the fallback entry so the round stays
    /// playable.
    pub fn start_round(&mut self, mode: Mode) -> RoundState {
        let count = if mode == Mode::Advanced { self.config.advanced_targets } else { 1 };

        let mut round_rng = self.rng.fork();
        let mut targets: SmallVec<[CountryCode; 3]> = round_rng
            .sample_indices(self.catalog.len(), count)
            .into_iter()
            .filter_map(|i| self.catalog.entry_at(i).map(|e| e.code.clone()))
            .collect();
        while targets.len() < count {
            targets.push(self.catalog.fallback().code.clone());
        }

        let mask = mode
            .uses_mask()
            .then(|| NameMask::new(&self.catalog.resolve(&targets[0]).name));

        let deadline = self
            .config
            .timer_enabled
            .then(|| Countdown::new(self.config.round_ticks));

        tracing::debug!(%mode, targets = targets.len(), "round started");
        RoundState::new(mode, targets, mask, deadline)
    }

    /// Submit an answer, resolving it under the round's mode rules.
    ///
    /// No-op once the round is resolved. Clears the draft: a submitted
    /// answer is no longer "entered but unsubmitted".
    pub fn submit(&self, state: &mut RoundState, answer: &Answer) {
        if state.is_resolved() {
            return;
        }
        state.draft = None;
        self.apply(state, answer);
    }

    /// Record the latest entered-but-unsubmitted answer.
    ///
    /// Applied as a final submission when the deadline expires. No-op once
    /// the round is resolved.
    pub fn set_draft(&self, state: &mut RoundState, answer: Answer) {
        if state.is_resolved() {
            return;
        }
        state.draft = Some(answer);
    }

    /// Advance the countdown by one tick.
    ///
    /// At zero the round force-resolves exactly once: the draft (if any)
    /// is applied as a final submission, and a round still pending after
    /// that resolves Incorrect. No-op without a deadline or once resolved.
    pub fn tick(&self, state: &mut RoundState) {
        if state.is_resolved() {
            return;
        }
        let Some(deadline) = state.deadline.as_mut() else {
            return;
        };

        deadline.tick();
        if !deadline.is_expired() {
            return;
        }

        if let Some(draft) = state.draft.take() {
            self.apply(state, &draft);
        }
        if !state.is_resolved() {
            state.outcome = Outcome::Incorrect;
        }
        tracing::debug!(mode = %state.mode, outcome = ?state.outcome, "deadline expired");
    }

    /// Mode resolution rules. Callers have already checked `is_resolved`.
    fn apply(&self, state: &mut RoundState, answer: &Answer) {
        match state.mode {
            Mode::GuessCountry | Mode::GuessFlag => {
                let target = self.catalog.resolve(state.target());
                let correct = matches!(answer, Answer::Name(name) if target.name_matches(name));
                if correct {
                    state.outcome = Outcome::Correct;
                } else {
                    state.attempts += 1;
                    state.outcome = Outcome::Incorrect;
                }
            }

            Mode::GuessHints => {
                let hit = match (state.mask.as_mut(), answer) {
                    (Some(mask), Answer::Letter(letter)) => mask.reveal(*letter) > 0,
                    _ => false,
                };
                if !hit {
                    state.attempts += 1;
                }

                if state.mask.as_ref().is_some_and(NameMask::is_complete) {
                    state.outcome = Outcome::Correct;
                } else if state.attempts >= self.config.max_attempts {
                    state.outcome = Outcome::Incorrect;
                }
            }

            Mode::Advanced => {
                if let Answer::Names(names) = answer {
                    for (slot, code) in state.targets.iter().enumerate() {
                        if state.matched[slot] {
                            continue;
                        }
                        if let Some(name) = names.get(slot) {
                            if self.catalog.resolve(code).name_matches(name) {
                                state.matched[slot] = true;
                            }
                        }
                    }
                }

                if state.matched.iter().all(|&m| m) {
                    state.outcome = Outcome::Correct;
                } else {
                    state.attempts += 1;
                    if state.attempts >= self.config.max_attempts {
                        state.outcome = Outcome::Incorrect;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryEntry;

    fn test_catalog() -> Catalog {
        Catalog::from_entries(vec![
            CountryEntry::new("ES", "Spain"),
            CountryEntry::new("FR", "France"),
            CountryEntry::new("GB", "United Kingdom"),
            CountryEntry::new("JP", "Japan"),
            CountryEntry::new("BR", "Brazil"),
        ])
    }

    fn engine() -> RoundEngine {
        RoundEngine::new(test_catalog(), RoundConfig::new(), 42)
    }

    fn engine_with(config: RoundConfig) -> RoundEngine {
        RoundEngine::new(test_catalog(), config, 42)
    }

    fn target_name(engine: &RoundEngine, state: &RoundState, slot: usize) -> String {
        engine.catalog().resolve(&state.targets()[slot]).name.clone()
    }

    #[test]
    fn test_start_round_shapes() {
        let mut engine = engine();

        let single = engine.start_round(Mode::GuessCountry);
        assert_eq!(single.targets().len(), 1);
        assert!(single.mask().is_none());
        assert!(single.deadline().is_none());

        let hints = engine.start_round(Mode::GuessHints);
        assert!(hints.mask().is_some());

        let advanced = engine.start_round(Mode::Advanced);
        assert_eq!(advanced.targets().len(), 3);
    }

    #[test]
    fn test_start_round_targets_distinct() {
        let mut engine = engine();

        for _ in 0..20 {
            let round = engine.start_round(Mode::Advanced);
            let mut codes: Vec<_> = round.targets().to_vec();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), 3, "advanced targets must be distinct");
        }
    }

    #[test]
    fn test_start_round_deterministic_per_seed() {
        let mut engine1 = RoundEngine::new(test_catalog(), RoundConfig::new(), 7);
        let mut engine2 = RoundEngine::new(test_catalog(), RoundConfig::new(), 7);

        for _ in 0..5 {
            let round1 = engine1.start_round(Mode::Advanced);
            let round2 = engine2.start_round(Mode::Advanced);
            assert_eq!(round1.targets(), round2.targets());
        }
    }

    #[test]
    fn test_round_stream_independent_of_prior_modes() {
        let mut engine1 = RoundEngine::new(test_catalog(), RoundConfig::new(), 7);
        let mut engine2 = RoundEngine::new(test_catalog(), RoundConfig::new(), 7);

        let _ = engine1.start_round(Mode::GuessCountry);
        let _ = engine2.start_round(Mode::Advanced);

        // Second round draws from its own fork either way
        let round1 = engine1.start_round(Mode::GuessHints);
        let round2 = engine2.start_round(Mode::GuessHints);
        assert_eq!(round1.targets(), round2.targets());
    }

    #[test]
    fn test_empty_catalog_round_is_playable() {
        let mut engine = RoundEngine::new(Catalog::new(), RoundConfig::new(), 42);

        let mut round = engine.start_round(Mode::GuessCountry);
        assert_eq!(round.target().as_str(), "XX");

        engine.submit(&mut round, &Answer::name("Unknown"));
        assert_eq!(round.outcome(), Outcome::Correct);
    }

    #[test]
    fn test_guess_country_correct_any_case() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("FR", "France")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);

        for candidate in ["France", "france", "FRANCE", "  france  "] {
            let mut round = engine.start_round(Mode::GuessCountry);
            engine.submit(&mut round, &Answer::name(candidate));
            assert_eq!(round.outcome(), Outcome::Correct, "candidate {candidate:?}");
        }
    }

    #[test]
    fn test_guess_country_incorrect_immediately() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::GuessCountry);

        engine.submit(&mut round, &Answer::name("Atlantis"));
        assert_eq!(round.outcome(), Outcome::Incorrect);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_guess_flag_same_rules_as_guess_country() {
        let mut engine = engine();

        let mut round = engine.start_round(Mode::GuessFlag);
        let name = target_name(&engine, &round, 0);
        engine.submit(&mut round, &Answer::name(name.to_lowercase()));
        assert_eq!(round.outcome(), Outcome::Correct);

        let mut round = engine.start_round(Mode::GuessFlag);
        engine.submit(&mut round, &Answer::name("Atlantis"));
        assert_eq!(round.outcome(), Outcome::Incorrect);
    }

    #[test]
    fn test_submit_idempotent_after_resolution() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::GuessCountry);

        engine.submit(&mut round, &Answer::name("Atlantis"));
        assert_eq!(round.outcome(), Outcome::Incorrect);
        let attempts = round.attempts();

        // Further submissions are no-ops, even correct ones
        let name = target_name(&engine, &round, 0);
        engine.submit(&mut round, &Answer::name(name));
        assert_eq!(round.outcome(), Outcome::Incorrect);
        assert_eq!(round.attempts(), attempts);
    }

    #[test]
    fn test_hints_hit_reveals_without_attempt() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("ES", "SPAIN")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);
        let mut round = engine.start_round(Mode::GuessHints);
        assert_eq!(round.mask().unwrap().display(), "- - - - -");

        engine.submit(&mut round, &Answer::letter('A'));
        assert_eq!(round.mask().unwrap().display(), "- - A - -");
        assert_eq!(round.attempts(), 0);
        assert_eq!(round.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_hints_miss_increments_attempts() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("ES", "SPAIN")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);
        let mut round = engine.start_round(Mode::GuessHints);

        engine.submit(&mut round, &Answer::letter('Z'));
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.mask().unwrap().display(), "- - - - -");
        assert_eq!(round.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_hints_three_misses_resolve_incorrect() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("ES", "SPAIN")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);
        let mut round = engine.start_round(Mode::GuessHints);

        engine.submit(&mut round, &Answer::letter('X'));
        engine.submit(&mut round, &Answer::letter('Y'));
        assert_eq!(round.outcome(), Outcome::Pending);
        engine.submit(&mut round, &Answer::letter('Z'));
        assert_eq!(round.outcome(), Outcome::Incorrect);
        assert_eq!(round.attempts(), 3);
    }

    #[test]
    fn test_hints_full_reveal_resolves_correct() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("FJ", "FIJI")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);
        let mut round = engine.start_round(Mode::GuessHints);

        engine.submit(&mut round, &Answer::letter('f'));
        engine.submit(&mut round, &Answer::letter('i'));
        engine.submit(&mut round, &Answer::letter('j'));
        assert_eq!(round.outcome(), Outcome::Correct);
        assert_eq!(round.attempts(), 0);
    }

    #[test]
    fn test_hints_wrong_answer_shape_is_a_miss() {
        let catalog = Catalog::from_entries(vec![CountryEntry::new("ES", "SPAIN")]);
        let mut engine = RoundEngine::new(catalog, RoundConfig::new(), 1);
        let mut round = engine.start_round(Mode::GuessHints);

        engine.submit(&mut round, &Answer::name("Spain"));
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_advanced_all_correct() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::Advanced);

        let names: Vec<String> = (0..3)
            .map(|slot| target_name(&engine, &round, slot).to_uppercase())
            .collect();

        engine.submit(&mut round, &Answer::names(names));
        assert_eq!(round.outcome(), Outcome::Correct);
        assert_eq!(round.attempts(), 0);
    }

    #[test]
    fn test_advanced_partial_match_counts_one_attempt() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::Advanced);

        let names = vec![
            target_name(&engine, &round, 0),
            target_name(&engine, &round, 1),
            "Atlantis".to_string(),
        ];

        engine.submit(&mut round, &Answer::names(names));
        assert_eq!(round.outcome(), Outcome::Pending);
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.matched(), &[true, true, false]);
    }

    #[test]
    fn test_advanced_matched_slots_stay_locked() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::Advanced);

        let first = Answer::names([target_name(&engine, &round, 0), "x".into(), "y".into()]);
        engine.submit(&mut round, &first);
        assert_eq!(round.matched(), &[true, false, false]);

        // Slot 0 stays matched even though the resubmission got it wrong
        let second =
            Answer::names(["wrong".to_string(), target_name(&engine, &round, 1), "y".into()]);
        engine.submit(&mut round, &second);
        assert_eq!(round.matched(), &[true, true, false]);
        assert_eq!(round.attempts(), 2);
    }

    #[test]
    fn test_advanced_three_failures_resolve_incorrect() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::Advanced);

        for _ in 0..2 {
            engine.submit(&mut round, &Answer::names(["a", "b", "c"]));
            assert_eq!(round.outcome(), Outcome::Pending);
        }
        engine.submit(&mut round, &Answer::names(["a", "b", "c"]));
        assert_eq!(round.outcome(), Outcome::Incorrect);
        assert_eq!(round.attempts(), 3);
    }

    #[test]
    fn test_advanced_completing_on_later_attempt() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::Advanced);

        let first = Answer::names([target_name(&engine, &round, 0), "x".into(), "y".into()]);
        engine.submit(&mut round, &first);

        let second = Answer::names([
            "ignored".to_string(),
            target_name(&engine, &round, 1),
            target_name(&engine, &round, 2),
        ]);
        engine.submit(&mut round, &second);

        assert_eq!(round.outcome(), Outcome::Correct);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut engine = engine_with(RoundConfig::new().with_timer(3));
        let mut round = engine.start_round(Mode::GuessCountry);
        assert_eq!(round.deadline().unwrap().remaining(), 3);

        engine.tick(&mut round);
        assert_eq!(round.deadline().unwrap().remaining(), 2);
        assert_eq!(round.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_tick_expiry_without_draft_is_incorrect() {
        let mut engine = engine_with(RoundConfig::new().with_timer(2));
        let mut round = engine.start_round(Mode::GuessCountry);

        engine.tick(&mut round);
        engine.tick(&mut round);
        assert_eq!(round.outcome(), Outcome::Incorrect);
    }

    #[test]
    fn test_tick_expiry_applies_draft() {
        let mut engine = engine_with(RoundConfig::new().with_timer(1));
        let mut round = engine.start_round(Mode::GuessCountry);

        let name = target_name(&engine, &round, 0);
        engine.set_draft(&mut round, Answer::name(name));
        engine.tick(&mut round);

        assert_eq!(round.outcome(), Outcome::Correct);
    }

    #[test]
    fn test_tick_expiry_with_wrong_draft_is_incorrect() {
        let mut engine = engine_with(RoundConfig::new().with_timer(1));
        let mut round = engine.start_round(Mode::GuessHints);

        engine.set_draft(&mut round, Answer::letter('z'));
        engine.tick(&mut round);

        // One miss would leave the round pending; expiry forces it closed
        assert_eq!(round.outcome(), Outcome::Incorrect);
    }

    #[test]
    fn test_tick_after_resolution_is_noop() {
        let mut engine = engine_with(RoundConfig::new().with_timer(1));
        let mut round = engine.start_round(Mode::GuessCountry);

        engine.tick(&mut round);
        assert_eq!(round.outcome(), Outcome::Incorrect);
        let attempts = round.attempts();

        engine.tick(&mut round);
        engine.tick(&mut round);
        assert_eq!(round.outcome(), Outcome::Incorrect);
        assert_eq!(round.attempts(), attempts);
    }

    #[test]
    fn test_tick_without_deadline_is_noop() {
        let mut engine = engine();
        let mut round = engine.start_round(Mode::GuessCountry);

        for _ in 0..100 {
            engine.tick(&mut round);
        }
        assert_eq!(round.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_submit_clears_draft() {
        let mut engine = engine_with(RoundConfig::new().with_timer(10));
        let mut round = engine.start_round(Mode::GuessHints);

        engine.set_draft(&mut round, Answer::letter('z'));
        assert!(round.draft().is_some());

        engine.submit(&mut round, &Answer::letter('q'));
        assert!(round.draft().is_none());
    }
}
