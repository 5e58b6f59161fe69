//! Candidate words and the mutations found for them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mutation::edit::Mutation;
use crate::mutation::engine::MutationEngine;

/// A normalized input word together with the dictionary words reachable
/// from it by a single insertion or deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateWord {
    /// The lowercased input word.
    pub word: String,
    /// Discovered mutations in generation order.
    pub mutations: Vec<Mutation>,
}

impl CandidateWord {
    /// Create a candidate from an input line, lowercasing its ASCII letters.
    ///
    /// Other characters are left alone so the word keeps its length and
    /// every edit position stays valid against the input.
    pub fn new<S: AsRef<str>>(line: S) -> Self {
        CandidateWord {
            word: line.as_ref().to_ascii_lowercase(),
            mutations: Vec::new(),
        }
    }

    /// Run the engine over this word, replacing any earlier results.
    pub fn solve(mut self, engine: &MutationEngine<'_>) -> Self {
        self.solve_in_place(engine);
        self
    }

    /// Like [`CandidateWord::solve`], for candidates held in a collection.
    pub fn solve_in_place(&mut self, engine: &MutationEngine<'_>) {
        self.mutations = engine.generate(&self.word);
    }

    pub fn has_mutations(&self) -> bool {
        !self.mutations.is_empty()
    }
}

/// Renders as `word: (result, (c, j)) (result, (c, j))`, or the bare word
/// when nothing was found.
impl fmt::Display for CandidateWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if let Some((first, rest)) = self.mutations.split_first() {
            write!(f, ": {first}")?;
            for mutation in rest {
                write!(f, " {mutation}")?;
            }
        }
        Ok(())
    }
}
