//! Generation of one-letter insertions and deletions.

use std::ops::RangeInclusive;

use log::trace;

use crate::mutation::dictionary::Dictionary;
use crate::mutation::edit::{Edit, Mutation};

/// Letters tried at every insertion point, in the order they are tried.
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Finds the dictionary words one insertion or deletion away from a word.
#[derive(Debug, Clone, Copy)]
pub struct MutationEngine<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> MutationEngine<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        MutationEngine { dictionary }
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Generate every mutation of `word` that is a dictionary word.
    ///
    /// Positions are visited from 0 to the word length inclusive. At each
    /// position the deletion of the character there is tested first, followed
    /// by the insertion of each letter of [`ALPHABET`] in order. Hits are
    /// returned in exactly that order.
    pub fn generate(&self, word: &str) -> Vec<Mutation> {
        let chars: Vec<char> = word.chars().collect();
        let mut mutations = Vec::new();
        let mut candidate = String::with_capacity(word.len() + 4);

        for position in 0..=chars.len() {
            let (head, tail) = chars.split_at(position);

            if let Some((_, rest)) = tail.split_first() {
                candidate.clear();
                candidate.extend(head);
                candidate.extend(rest);
                if self.dictionary.contains(&candidate) {
                    mutations.push(Mutation::new(candidate.clone(), Edit::deletion(position)));
                }
            }

            for letter in ALPHABET {
                candidate.clear();
                candidate.extend(head);
                candidate.push(letter);
                candidate.extend(tail);
                if self.dictionary.contains(&candidate) {
                    mutations.push(Mutation::new(
                        candidate.clone(),
                        Edit::insertion(letter, position),
                    ));
                }
            }
        }

        trace!("{word:?}: {} mutation(s)", mutations.len());
        mutations
    }
}

/// Generate every mutation of `word` that is a word in `dictionary`.
///
/// See [`MutationEngine::generate`] for the ordering of the results.
pub fn generate(word: &str, dictionary: &Dictionary) -> Vec<Mutation> {
    MutationEngine::new(dictionary).generate(word)
}
