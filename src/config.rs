//! Runtime limits for textutil readers.
//!
//! Every reader receives its limits explicitly; nothing here is global.
//! The defaults match the classic fixed buffer sizes, but overflowing them
//! is reported as an error instead of silently splitting the input.

/// Default maximum line length in bytes, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Default maximum word length in bytes.
pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// Default number of buckets in a word frequency table.
pub const DEFAULT_HASH_BUCKETS: usize = 101;

/// Input size limits shared by the line reader and the word scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest accepted line, including its `\n`.
    pub max_line_len: usize,
    /// Longest accepted word.
    pub max_word_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

impl Limits {
    pub const fn new() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    /// Override the line length limit.
    pub fn with_max_line_len(mut self, n: usize) -> Self {
        self.max_line_len = n;
        self
    }

    /// Override the word length limit.
    pub fn with_max_word_len(mut self, n: usize) -> Self {
        self.max_word_len = n;
        self
    }
}
