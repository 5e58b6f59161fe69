//! Error types for the Virtuoso library.
//!
//! The mutation engine itself never fails. Errors only come from the edges of a
//! run: opening the dictionary or candidate list, reading their lines, and
//! writing the rendered results. All of them are represented by the
//! [`VirtuosoError`] enum.
//!
//! # Examples
//!
//! ```
//! use virtuoso::error::{InputSource, VirtuosoError, Result};
//!
//! fn open_words() -> Result<()> {
//!     Err(VirtuosoError::input_unavailable(
//!         InputSource::Candidates,
//!         "virtuoso.txt",
//!         "No such file or directory",
//!     ))
//! }
//!
//! match open_words() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;

use anyhow;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The input a run could not obtain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// The reference word list.
    Dictionary,
    /// The list of words to mutate.
    Candidates,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Dictionary => write!(f, "dictionary"),
            InputSource::Candidates => write!(f, "words"),
        }
    }
}

/// The main error type for Virtuoso operations.
#[derive(Error, Debug)]
pub enum VirtuosoError {
    /// An input file could not be opened.
    #[error("unable to open {source_kind} file {path}: {reason}")]
    InputUnavailable {
        source_kind: InputSource,
        path: String,
        reason: String,
    },

    /// I/O errors while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error, for callers embedding the library that bubble
    /// their own `anyhow::Error` contexts through a Virtuoso `Result`
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with VirtuosoError.
pub type Result<T> = std::result::Result<T, VirtuosoError>;

impl VirtuosoError {
    /// Create a new input unavailable error.
    pub fn input_unavailable<P, R>(source_kind: InputSource, path: P, reason: R) -> Self
    where
        P: Into<String>,
        R: fmt::Display,
    {
        VirtuosoError::InputUnavailable {
            source_kind,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        VirtuosoError::Other(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// A missing dictionary exits with 1 and a missing word list with 2, so
    /// scripts can tell the two apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            VirtuosoError::InputUnavailable {
                source_kind: InputSource::Candidates,
                ..
            } => 2,
            _ => 1,
        }
    }
}
