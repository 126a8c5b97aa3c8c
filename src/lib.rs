//! textutil: a small text-processing toolkit
//!
//! This library provides the operations behind the `textutil` command:
//! counting, literal search, replacement, line ranges, ASCII case
//! conversion, adjacent-duplicate removal, word frequencies and sorting.
//!
//! # Features
//!
//! - **Bounded input**: lines and words have explicit length limits,
//!   reported as errors instead of silent truncation
//! - **Byte oriented**: no Unicode processing, input need not be UTF-8
//! - **Sequential**: inputs are processed one after another with fresh state
//!
//! # Example
//!
//! ```rust
//! use textutil::commands::SortCommand;
//! use textutil::output::TextWriter;
//!
//! let mut out = Vec::new();
//! {
//!     let mut writer = TextWriter::new(&mut out);
//!     SortCommand::new()
//!         .run(&b"banana\napple\ncherry\n"[..], &mut writer)
//!         .unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(out, b"apple\nbanana\ncherry\n");
//! ```

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod freq;
pub mod input;
pub mod output;
pub mod words;

// Re-export commonly used types
pub use config::Limits;
pub use dispatch::{Dispatcher, Mode};
pub use freq::{FrequencyTable, WordEntry};
pub use input::{InputSource, LineReader, Result, TextError};
pub use output::TextWriter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{
        CaseCommand, CountCommand, FindCommand, PrintLinesCommand, ReplaceCommand, SortCommand,
        UniqueCommand, WordFreqCommand,
    };
    pub use crate::config::Limits;
    pub use crate::dispatch::{Dispatcher, Mode};
    pub use crate::freq::FrequencyTable;
    pub use crate::input::{InputSource, TextError};
    pub use crate::output::TextWriter;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::commands::{ReplaceCommand, UniqueCommand};
        use crate::output::TextWriter;

        let mut replaced = Vec::new();
        {
            let mut writer = TextWriter::new(&mut replaced);
            let cmd = ReplaceCommand::new(b"X", b"-").unwrap();
            cmd.run(&b"aXbXc\naXbXc\n"[..], &mut writer).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(replaced, b"a-b-c\na-b-c\n");

        let mut deduped = Vec::new();
        {
            let mut writer = TextWriter::new(&mut deduped);
            UniqueCommand::new()
                .run(&replaced[..], &mut writer)
                .unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(deduped, b"a-b-c\n");
    }

    #[test]
    fn test_word_freq_workflow() {
        use crate::commands::WordFreqCommand;

        let (table, total) = WordFreqCommand::new()
            .build(&b"to be or not to be"[..])
            .unwrap();
        assert_eq!(total, 6);
        assert_eq!(table.lookup(b"to").unwrap().count, 2);
        assert_eq!(table.lookup(b"be").unwrap().count, 2);
        assert_eq!(table.lookup(b"or").unwrap().count, 1);
        assert!(table.lookup(b"question").is_none());
    }
}
