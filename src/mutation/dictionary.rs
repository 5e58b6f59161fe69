//! Reference word list used to decide what counts as a real word.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::{InputSource, Result};
use crate::mutation::input::{read_lines, read_lines_from_file};

/// An immutable set of lowercase words.
///
/// Lookups are exact: [`Dictionary::contains`] does not normalize its
/// argument, so callers query with already lowercased words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from lines of text, one word per line.
    ///
    /// Every line is ASCII-lowercased before insertion and duplicates
    /// collapse. Blank lines are kept as the empty word.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.as_ref().to_ascii_lowercase())
            .collect();

        Dictionary { words }
    }

    /// Read a dictionary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::build(read_lines(reader, false)?))
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from_file_with(path, false)
    }

    /// Load a dictionary from a file, stripping surrounding whitespace from
    /// every line first when `trim` is set.
    pub fn load_from_file_with<P: AsRef<Path>>(path: P, trim: bool) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::build(read_lines_from_file(path, InputSource::Dictionary, trim)?);
        debug!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Check whether `word` is a known word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::build(iter)
    }
}
