//! # Virtuoso
//!
//! Finds, for each candidate word, every dictionary word that is one letter
//! insertion or one letter deletion away, and records where the letter went.
//!
//! ## Features
//!
//! - Deterministic, position-ordered results
//! - Optional per-word parallelism with rayon
//! - Human, JSON and CSV output from the `virtuoso` binary
//!
//! ```
//! use virtuoso::mutation::{Dictionary, Edit, Mutation, generate};
//!
//! let dictionary = Dictionary::build(["cat", "cart", "at", "cats"]);
//! let mutations = generate("at", &dictionary);
//!
//! assert_eq!(mutations, vec![Mutation::new("cat", Edit::insertion('c', 0))]);
//! ```

pub mod cli;
pub mod error;
pub mod mutation;

pub mod prelude {
    pub use crate::error::{Result, VirtuosoError};
    pub use crate::mutation::{
        CandidateWord, Dictionary, Edit, Mutation, MutationEngine, Solver, SolverConfig, generate,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
