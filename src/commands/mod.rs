//! Command implementations for textutil.

pub mod case;
pub mod count;
pub mod find;
pub mod print_lines;
pub mod replace;
pub mod sort;
pub mod unique;
pub mod word_freq;

pub use case::{CaseCommand, CaseMode};
pub use count::{CountCommand, Counts};
pub use find::FindCommand;
pub use print_lines::PrintLinesCommand;
pub use replace::ReplaceCommand;
pub use sort::SortCommand;
pub use unique::UniqueCommand;
pub use word_freq::WordFreqCommand;

/// Per-run counters, printed to stderr with `--stats`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub inputs: usize,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub lines_written: u64,
}

impl Stats {
    /// Empty counters for a single input.
    pub fn for_input() -> Self {
        Self {
            inputs: 1,
            ..Default::default()
        }
    }

    /// Add another run's counters to these.
    pub fn merge(&mut self, other: Stats) {
        self.inputs += other.inputs;
        self.lines_read += other.lines_read;
        self.bytes_read += other.bytes_read;
        self.lines_written += other.lines_written;
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Inputs: {}, Lines read: {}, Bytes read: {}, Lines written: {}",
            self.inputs, self.lines_read, self.bytes_read, self.lines_written
        )
    }
}
