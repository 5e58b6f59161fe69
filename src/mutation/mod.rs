//! Single-letter mutation discovery.
//!
//! This module builds the reference [`Dictionary`], generates every one-letter
//! insertion and deletion of a candidate word, and keeps the variants that
//! are real words together with the [`Edit`] that produced them.

pub mod candidate;
pub mod dictionary;
pub mod edit;
pub mod engine;
pub mod input;
pub mod solver;

// Re-export commonly used types
pub use candidate::*;
pub use dictionary::*;
pub use edit::*;
pub use engine::*;
pub use solver::*;
