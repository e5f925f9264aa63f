//! Whole-file strategy for small files.
//!
//! Decodes the complete file as UTF-8 and slices the final N lines. This is
//! the correctness baseline the reverse-scan strategy is checked against.

use crate::error::{Result, TailError};
use std::path::Path;

/// Read the last `count` lines of a small file in one pass.
///
/// Returns the raw line spans plus the 1-based number of the first returned
/// line. An empty file yields no spans.
pub(crate) fn read(path: &Path, count: usize) -> Result<(Vec<String>, u64)> {
    let bytes = std::fs::read(path).map_err(|e| {
        TailError::file_error(format!("Failed to read file: {}", path.display()), e)
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        TailError::file_error(
            "File is not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;

    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(count);
    let spans = lines[start..].iter().map(|s| s.to_string()).collect();

    Ok((spans, start as u64 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write test data");
        file.flush().expect("Failed to flush test data");
        file
    }

    #[test]
    fn test_returns_last_lines_with_start_number() {
        let file = create_test_file(b"one\ntwo\nthree\nfour\n");

        let (spans, start) = read(file.path(), 2).unwrap();
        assert_eq!(spans, vec!["three", "four"]);
        assert_eq!(start, 3);
    }

    #[test]
    fn test_requesting_more_than_available_returns_all() {
        let file = create_test_file(b"one\ntwo\n");

        let (spans, start) = read(file.path(), 10).unwrap();
        assert_eq!(spans, vec!["one", "two"]);
        assert_eq!(start, 1);
    }

    #[test]
    fn test_empty_file_yields_no_spans() {
        let file = create_test_file(b"");

        let (spans, start) = read(file.path(), 5).unwrap();
        assert!(spans.is_empty());
        assert_eq!(start, 1);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let file = create_test_file(b"alpha\r\nbeta\r\n");

        let (spans, _) = read(file.path(), 10).unwrap();
        assert_eq!(spans, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_missing_trailing_newline_keeps_last_line() {
        let file = create_test_file(b"one\ntwo");

        let (spans, start) = read(file.path(), 1).unwrap();
        assert_eq!(spans, vec!["two"]);
        assert_eq!(start, 2);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let file = create_test_file(&[0xff, 0xfe, b'\n']);

        let err = read(file.path(), 1).unwrap_err();
        match err {
            TailError::FileError { message, .. } => {
                assert!(message.contains("not valid UTF-8"));
            }
            other => panic!("Expected FileError, got {other:?}"),
        }
    }
}
