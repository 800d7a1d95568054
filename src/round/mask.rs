//! Masked-name representation for the hint mode.
//!
//! Alphabetic characters start hidden; whitespace and punctuation are
//! visible from the start. Revealing a letter uncovers every occurrence,
//! case-insensitively, while keeping the target's original casing.

use serde::{Deserialize, Serialize};

/// Partially revealed target name.
///
/// ## Example
///
/// ```
/// use flag_quiz::round::NameMask;
///
/// let mut mask = NameMask::new("SPAIN");
/// assert_eq!(mask.display(), "- - - - -");
///
/// assert_eq!(mask.reveal('a'), 1);
/// assert_eq!(mask.display(), "- - A - -");
///
/// assert_eq!(mask.reveal('z'), 0);
/// assert!(!mask.is_complete());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMask {
    cells: Vec<Cell>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Cell {
    ch: char,
    revealed: bool,
}

impl NameMask {
    /// Build the initial mask for a target name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let cells = name
            .chars()
            .map(|ch| Cell {
                ch,
                revealed: !ch.is_alphabetic(),
            })
            .collect();
        Self { cells }
    }

    /// Reveal every occurrence of a letter, case-insensitively.
    ///
    /// Returns the number of cells newly revealed; 0 means a miss.
    pub fn reveal(&mut self, letter: char) -> usize {
        let wanted = letter.to_lowercase().collect::<String>();

        let mut revealed = 0;
        for cell in &mut self.cells {
            if !cell.revealed && cell.ch.to_lowercase().collect::<String>() == wanted {
                cell.revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    /// Whether every character is revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.revealed)
    }

    /// Render one cell per character, joined by single spaces, hidden
    /// cells as `-`.
    #[must_use]
    pub fn display(&self) -> String {
        let rendered: Vec<String> = self
            .cells
            .iter()
            .map(|c| if c.revealed { c.ch.to_string() } else { "-".to_string() })
            .collect();
        rendered.join(" ")
    }

    /// Number of characters in the target name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the target name is empty (mask of an empty string is
    /// trivially complete).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
