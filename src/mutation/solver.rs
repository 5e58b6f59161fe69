//! A full run: one dictionary, an ordered list of candidate words.

use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{InputSource, Result};
use crate::mutation::candidate::CandidateWord;
use crate::mutation::dictionary::Dictionary;
use crate::mutation::engine::MutationEngine;
use crate::mutation::input::read_lines_from_file;

/// Configuration for a solver run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Process candidate words on the rayon thread pool.
    pub parallel: bool,
    /// Strip surrounding whitespace from input lines before lowercasing.
    pub trim_lines: bool,
}

/// Holds the dictionary and candidate words of a run and fills in each
/// candidate's mutations.
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Dictionary,
    candidates: Vec<CandidateWord>,
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with no candidate words.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, SolverConfig::default())
    }

    pub fn with_config(dictionary: Dictionary, config: SolverConfig) -> Self {
        Solver {
            dictionary,
            candidates: Vec::new(),
            config,
        }
    }

    /// Load the dictionary and then the candidate list from files.
    ///
    /// The dictionary is opened first; if it is unavailable the candidate
    /// file is never touched.
    pub fn load<P, Q>(dictionary_path: P, words_path: Q, config: SolverConfig) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let dictionary = Dictionary::load_from_file_with(dictionary_path, config.trim_lines)?;

        let word_lines = read_lines_from_file(
            words_path.as_ref(),
            InputSource::Candidates,
            config.trim_lines,
        )?;
        debug!(
            "Loaded {} candidate words from {}",
            word_lines.len(),
            words_path.as_ref().display()
        );

        let mut solver = Self::with_config(dictionary, config);
        solver.set_candidates(word_lines);
        Ok(solver)
    }

    /// Replace the candidate list with the given lines, in order.
    pub fn set_candidates<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.candidates = lines
            .into_iter()
            .map(|line| {
                let line = line.as_ref();
                if self.config.trim_lines {
                    CandidateWord::new(line.trim())
                } else {
                    CandidateWord::new(line)
                }
            })
            .collect();
    }

    /// Generate the mutations of every candidate word.
    ///
    /// Candidates keep their input order whether or not the run is parallel.
    pub fn process(&mut self) {
        let start_time = Instant::now();
        let engine = MutationEngine::new(&self.dictionary);

        if self.config.parallel {
            self.candidates
                .par_iter_mut()
                .for_each(|candidate| candidate.solve_in_place(&engine));
        } else {
            for candidate in &mut self.candidates {
                candidate.solve_in_place(&engine);
            }
        }

        let found: usize = self.candidates.iter().map(|c| c.mutations.len()).sum();
        info!(
            "Processed {} candidate words against {} dictionary words in {:?}, {} mutations found",
            self.candidates.len(),
            self.dictionary.len(),
            start_time.elapsed(),
            found
        );
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn candidates(&self) -> &[CandidateWord] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<CandidateWord> {
        self.candidates
    }
}

/// Build a solver from in-memory lines, process it and return the results.
pub fn solve<I, S>(dictionary: &Dictionary, lines: I, config: SolverConfig) -> Vec<CandidateWord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut solver = Solver::with_config(dictionary.clone(), config);
    solver.set_candidates(lines);
    solver.process();
    solver.into_candidates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::edit::{Edit, Mutation};

    fn sample_dictionary() -> Dictionary {
        Dictionary::build(["cat", "cart", "at", "cats", "a", "t"])
    }

    #[test]
    fn test_process_preserves_order() {
        let mut solver = Solver::new(sample_dictionary());
        solver.set_candidates(["CART", "at", "zebra", ""]);
        solver.process();

        let words: Vec<&str> = solver.candidates().iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["cart", "at", "zebra", ""]);

        let candidates = solver.candidates();
        assert_eq!(
            candidates[0].mutations,
            vec![Mutation::new("cat", Edit::deletion(2))]
        );
        assert_eq!(
            candidates[1].mutations,
            vec![
                Mutation::new("t", Edit::deletion(0)),
                Mutation::new("cat", Edit::insertion('c', 0)),
                Mutation::new("a", Edit::deletion(1)),
            ]
        );
        assert!(candidates[2].mutations.is_empty());
        assert_eq!(
            candidates[3].mutations,
            vec![
                Mutation::new("a", Edit::insertion('a', 0)),
                Mutation::new("t", Edit::insertion('t', 0)),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<String> = ["cart", "at", "cat", "ca", "scat", "", "x"]
            .iter()
            .cycle()
            .take(200)
            .map(|s| s.to_string())
            .collect();

        let sequential = solve(&sample_dictionary(), &lines, SolverConfig::default());
        let parallel = solve(
            &sample_dictionary(),
            &lines,
            SolverConfig {
                parallel: true,
                ..Default::default()
            },
        );

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_trim_lines() {
        let config = SolverConfig {
            trim_lines: true,
            ..Default::default()
        };
        let results = solve(&sample_dictionary(), ["  At "], config);
        assert_eq!(results[0].word, "at");
        assert!(results[0].has_mutations());

        let results = solve(&sample_dictionary(), ["  At "], SolverConfig::default());
        assert_eq!(results[0].word, "  at ");
        assert!(!results[0].has_mutations());
    }

    #[test]
    fn test_load_trims_both_inputs() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let dictionary_path = dir.path().join("dict.txt");
        let words_path = dir.path().join("words.txt");
        fs::write(&dictionary_path, " Cat \nat\n").unwrap();
        fs::write(&words_path, "  AT\n").unwrap();

        let config = SolverConfig {
            trim_lines: true,
            ..Default::default()
        };
        let mut solver = Solver::load(&dictionary_path, &words_path, config).unwrap();
        assert!(solver.dictionary().contains("cat"));
        assert_eq!(solver.dictionary().len(), 2);

        solver.process();
        assert_eq!(
            solver.candidates()[0].mutations,
            vec![Mutation::new("cat", Edit::insertion('c', 0))]
        );

        let solver = Solver::load(&dictionary_path, &words_path, SolverConfig::default()).unwrap();
        assert!(solver.dictionary().contains(" cat "));
        assert!(!solver.dictionary().contains("cat"));
    }

    #[test]
    fn test_set_candidates_replaces() {
        let mut solver = Solver::new(sample_dictionary());
        solver.set_candidates(["one", "two"]);
        solver.set_candidates(["three"]);
        assert_eq!(solver.candidates().len(), 1);
        assert_eq!(solver.config(), &SolverConfig::default());
    }
}
