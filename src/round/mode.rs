//! Game modes and answer shapes.
//!
//! The four modes of the original menu, collapsed into one tagged variant
//! so all resolution rules live in a single place instead of per-screen
//! duplicates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the four quiz modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Shown a flag, type the country name. Resolves on the first answer.
    GuessCountry,
    /// Guess the masked country name one letter at a time.
    /// Three wrong letters end the round.
    GuessHints,
    /// Shown a country name, pick the matching flag. Resolves on the
    /// first answer.
    GuessFlag,
    /// Three flags at once; name all three within three attempts.
    Advanced,
}

impl Mode {
    /// All modes, in menu order.
    #[must_use]
    pub const fn all() -> [Mode; 4] {
        [Mode::GuessCountry, Mode::GuessHints, Mode::GuessFlag, Mode::Advanced]
    }

    /// Whether a single wrong answer ends the round.
    #[must_use]
    pub const fn single_shot(self) -> bool {
        matches!(self, Mode::GuessCountry | Mode::GuessFlag)
    }

    /// Whether this mode plays against a masked name.
    #[must_use]
    pub const fn uses_mask(self) -> bool {
        matches!(self, Mode::GuessHints)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Mode::GuessCountry => "Guess the Country",
            Mode::GuessHints => "Guess-Hints",
            Mode::GuessFlag => "Guess the Flag",
            Mode::Advanced => "Advanced Level",
        };
        write!(f, "{label}")
    }
}

/// A submitted answer.
///
/// The shape depends on the mode: a full name for the single-target modes,
/// a single letter for the hint mode, three names for the advanced mode.
/// A shape that does not fit the mode counts as a plain miss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Full country name.
    Name(String),
    /// Single letter guess against the mask.
    Letter(char),
    /// One name per advanced-round flag, in display order.
    Names(SmallVec<[String; 3]>),
}

impl Answer {
    /// A full-name answer.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// A single-letter answer.
    #[must_use]
    pub fn letter(letter: char) -> Self {
        Self::Letter(letter)
    }

    /// A multi-name answer, one per target.
    #[must_use]
    pub fn names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::Names(names.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_classification() {
        assert!(Mode::GuessCountry.single_shot());
        assert!(Mode::GuessFlag.single_shot());
        assert!(!Mode::GuessHints.single_shot());
        assert!(!Mode::Advanced.single_shot());

        assert!(Mode::GuessHints.uses_mask());
        assert!(!Mode::Advanced.uses_mask());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::GuessCountry.to_string(), "Guess the Country");
        assert_eq!(Mode::Advanced.to_string(), "Advanced Level");
    }

    #[test]
    fn test_answer_constructors() {
        assert_eq!(Answer::name("France"), Answer::Name("France".to_string()));
        assert_eq!(Answer::letter('a'), Answer::Letter('a'));

        let multi = Answer::names(["France", "Spain", "United Kingdom"]);
        match multi {
            Answer::Names(names) => assert_eq!(names.len(), 3),
            other => panic!("unexpected answer: {other:?}"),
        }
    }
}
