//! Adjacent duplicate suppression.
//!
//! A line is dropped when it is byte-identical, terminator included, to the
//! line just before it. Non-adjacent repeats are kept.

use super::Stats;
use crate::config::Limits;
use crate::input::{LineReader, Result};
use crate::output::TextWriter;
use std::io::{Read, Write};

/// Unique command configuration.
#[derive(Debug, Clone, Default)]
pub struct UniqueCommand {
    limits: Limits,
}

impl UniqueCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let mut reader = LineReader::new(input, &self.limits);
        let mut stats = Stats::for_input();
        let mut last: Option<Vec<u8>> = None;

        while let Some(line) = reader.read_line()? {
            if last.as_deref() == Some(line) {
                continue;
            }
            output.write_bytes(line)?;
            stats.lines_written += 1;

            let prev = last.get_or_insert_with(Vec::new);
            prev.clear();
            prev.extend_from_slice(line);
        }

        stats.lines_read = reader.line_number() as u64;
        stats.bytes_read = reader.bytes_read();
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(content: &str) -> String {
        let mut out = Vec::new();
        {
            let mut writer = TextWriter::new(&mut out);
            UniqueCommand::new()
                .run(content.as_bytes(), &mut writer)
                .unwrap();
            writer.flush().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_adjacent_duplicates_removed() {
        assert_eq!(unique("a\na\nb\nb\nb\nc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_non_adjacent_kept() {
        assert_eq!(unique("a\nb\na\n"), "a\nb\na\n");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(unique("\n\n\nx\n"), "\nx\n");
    }

    #[test]
    fn test_terminator_matters() {
        assert_eq!(unique("a\na"), "a\na");
    }

    #[test]
    fn test_idempotent() {
        let once = unique("x\nx\ny\nx\nx\n");
        assert_eq!(unique(&once), once);
    }
}
