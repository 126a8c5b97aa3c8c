//! Line range printing.
//!
//! Prints lines `start..=end` (1-based) as `lineno: line` and stops reading
//! as soon as line `end` has been seen.

use super::Stats;
use crate::config::Limits;
use crate::input::{LineReader, Result};
use crate::output::TextWriter;
use std::io::{Read, Write};

/// Print-lines command configuration.
#[derive(Debug, Clone)]
pub struct PrintLinesCommand {
    pub start: usize,
    pub end: usize,
    limits: Limits,
}

impl PrintLinesCommand {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    fn in_range(&self, lineno: usize) -> bool {
        lineno >= self.start && lineno <= self.end
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let mut reader = LineReader::new(input, &self.limits);
        let mut stats = Stats::for_input();
        let mut lineno = 0usize;

        while lineno < self.end {
            let Some(line) = reader.read_line()? else {
                break;
            };
            lineno += 1;
            if self.in_range(lineno) {
                output.write_int(lineno)?;
                output.write_bytes(b": ")?;
                output.write_terminated(line)?;
                stats.lines_written += 1;
            }
        }

        stats.lines_read = reader.line_number() as u64;
        stats.bytes_read = reader.bytes_read();
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextError;

    fn print_lines(start: usize, end: usize, content: &str) -> (String, Stats) {
        let mut out = Vec::new();
        let stats;
        {
            let mut writer = TextWriter::new(&mut out);
            stats = PrintLinesCommand::new(start, end)
                .run(content.as_bytes(), &mut writer)
                .unwrap();
            writer.flush().unwrap();
        }
        (String::from_utf8(out).unwrap(), stats)
    }

    #[test]
    fn test_middle_range() {
        let (out, _) = print_lines(2, 3, "l1\nl2\nl3\nl4\n");
        assert_eq!(out, "2: l2\n3: l3\n");
    }

    #[test]
    fn test_stops_after_end() {
        let (_, stats) = print_lines(1, 2, "a\nb\nc\nd\n");
        assert_eq!(stats.lines_read, 2);
    }

    #[test]
    fn test_range_past_eof() {
        let (out, _) = print_lines(2, 10, "a\nb");
        assert_eq!(out, "2: b\n");
    }

    #[test]
    fn test_inverted_range_prints_nothing() {
        let (out, _) = print_lines(3, 2, "a\nb\nc\n");
        assert_eq!(out, "");
    }

    #[test]
    fn test_zero_start_includes_first_line() {
        let (out, _) = print_lines(0, 1, "a\nb\n");
        assert_eq!(out, "1: a\n");
    }

    #[test]
    fn test_long_line_after_end_not_read() {
        let cmd = PrintLinesCommand::new(1, 1).with_limits(Limits::new().with_max_line_len(4));
        let mut out = Vec::new();
        let mut writer = TextWriter::new(&mut out);
        assert!(cmd.run(&b"ok\nway too long\n"[..], &mut writer).is_ok());

        let cmd = PrintLinesCommand::new(1, 2).with_limits(Limits::new().with_max_line_len(4));
        let err = cmd
            .run(&b"ok\nway too long\n"[..], &mut writer)
            .unwrap_err();
        assert!(matches!(err, TextError::LineTooLong { line: 2, .. }));
    }
}
