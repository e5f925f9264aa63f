//! Numbered-line records and assembly from raw text spans.

use std::fmt;

/// A single line of a file together with its absolute, 1-based line number.
///
/// Records are immutable once constructed and compare field-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    number: u64,
    content: String,
}

impl Line {
    /// Create a new line record.
    ///
    /// Line numbers are 1-based; a number of zero is a programming error
    /// upstream and only checked in debug builds.
    pub fn new(number: u64, content: impl Into<String>) -> Self {
        debug_assert!(number >= 1, "line numbers are 1-based");
        Self {
            number,
            content: content.into(),
        }
    }

    /// Absolute position of this line within the file, starting at 1
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Line text without its terminator
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.content)
    }
}

/// Turn raw text spans into line records numbered sequentially from `start_line`.
///
/// Pure function; `start_line` must already account for the spans' absolute
/// position in the file.
pub(crate) fn assemble(spans: Vec<String>, start_line: u64) -> Vec<Line> {
    debug_assert!(start_line >= 1, "start_line is 1-based");
    spans
        .into_iter()
        .enumerate()
        .map(|(offset, content)| Line::new(start_line + offset as u64, content))
        .collect()
}
