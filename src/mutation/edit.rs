//! Single-character edits and the words they produce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker rendered in place of a letter when an edit removes a character.
///
/// A space can never be one of the inserted letters, so the two kinds of
/// edit stay distinguishable in the rendered `(letter, position)` pair.
pub const REMOVAL_MARKER: char = ' ';

/// A single character-level change to a base word.
///
/// Positions are zero-based character indices into the base word, i.e. the
/// word before the edit is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edit {
    /// `letter` inserted before the character at `position`
    /// (or appended when `position` equals the word length).
    Insertion { letter: char, position: usize },
    /// The character at `position` removed.
    Deletion { position: usize },
}

impl Edit {
    pub fn insertion(letter: char, position: usize) -> Self {
        Edit::Insertion { letter, position }
    }

    pub fn deletion(position: usize) -> Self {
        Edit::Deletion { position }
    }

    pub fn position(&self) -> usize {
        match *self {
            Edit::Insertion { position, .. } | Edit::Deletion { position } => position,
        }
    }

    /// The inserted letter, or `None` for a deletion.
    pub fn letter(&self) -> Option<char> {
        match *self {
            Edit::Insertion { letter, .. } => Some(letter),
            Edit::Deletion { .. } => None,
        }
    }

    /// The inserted letter, or [`REMOVAL_MARKER`] for a deletion.
    pub fn marker(&self) -> char {
        self.letter().unwrap_or(REMOVAL_MARKER)
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Edit::Deletion { .. })
    }

    /// Apply this edit to `word`.
    ///
    /// Returns `None` when the position is out of range for the word.
    pub fn apply(&self, word: &str) -> Option<String> {
        let mut chars: Vec<char> = word.chars().collect();
        match *self {
            Edit::Insertion { letter, position } => {
                if position > chars.len() {
                    return None;
                }
                chars.insert(position, letter);
            }
            Edit::Deletion { position } => {
                if position >= chars.len() {
                    return None;
                }
                chars.remove(position);
            }
        }
        Some(chars.into_iter().collect())
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.marker(), self.position())
    }
}

/// A dictionary word reached from a base word by one [`Edit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    /// The resulting dictionary word.
    pub word: String,
    /// The edit that turns the base word into `word`.
    pub edit: Edit,
}

impl Mutation {
    pub fn new<S: Into<String>>(word: S, edit: Edit) -> Self {
        Mutation {
            word: word.into(),
            edit,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.word, self.edit)
    }
}
