//! Line-oriented input files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{InputSource, Result, VirtuosoError};

/// Read all lines of `reader`, optionally stripping surrounding whitespace.
pub fn read_lines<R: BufRead>(reader: R, trim: bool) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if trim {
            lines.push(line.trim().to_string());
        } else {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Open `path` and read its lines.
///
/// Failure to open the file is reported as [`VirtuosoError::InputUnavailable`]
/// tagged with `source`, so the caller can tell which input was missing.
pub fn read_lines_from_file<P: AsRef<Path>>(
    path: P,
    source: InputSource,
    trim: bool,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        VirtuosoError::input_unavailable(source, path.display().to_string(), e)
    })?;

    read_lines(BufReader::new(file), trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_verbatim() {
        let lines = read_lines(Cursor::new("Cat \n dog\n\n"), false).unwrap();
        assert_eq!(lines, vec!["Cat ", " dog", ""]);
    }

    #[test]
    fn test_read_lines_trimmed() {
        let lines = read_lines(Cursor::new("Cat \n dog\n\n"), true).unwrap();
        assert_eq!(lines, vec!["Cat", "dog", ""]);
    }

    #[test]
    fn test_missing_file_names_source() {
        let err =
            read_lines_from_file("/nonexistent/words.txt", InputSource::Candidates, false)
                .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
