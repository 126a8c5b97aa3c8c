//! Sort command implementation.
//!
//! Sort order:
//! 1. Byte-wise lexicographic comparison of whole lines, terminator included
//! 2. Duplicates retained
//! 3. Ties: unspecified (unstable sort)
//!
//! The whole input is held in memory. A final line without a terminator is
//! given one when collected, so it compares and prints like every other line.

use super::Stats;
use crate::config::Limits;
use crate::input::{LineReader, Result, TextError};
use crate::output::TextWriter;
use std::io::{Read, Write};

/// Sort command configuration.
#[derive(Debug, Clone, Default)]
pub struct SortCommand {
    /// Reverse the sort order
    pub reverse: bool,
    limits: Limits,
}

impl SortCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Read every line of a stream into memory, in input order.
    ///
    /// Every returned line ends with `\n`.
    pub fn collect<R: Read>(&self, input: R) -> Result<(Vec<Vec<u8>>, u64)> {
        let mut reader = LineReader::new(input, &self.limits);
        let mut lines: Vec<Vec<u8>> = Vec::new();

        while let Some(line) = reader.read_line()? {
            lines.try_reserve(1).map_err(|_| TextError::OutOfMemory)?;
            let terminated = line.last() == Some(&b'\n');
            let len = if terminated { line.len() } else { line.len() + 1 };
            let mut owned = Vec::new();
            owned
                .try_reserve_exact(len)
                .map_err(|_| TextError::OutOfMemory)?;
            owned.extend_from_slice(line);
            if !terminated {
                owned.push(b'\n');
            }
            lines.push(owned);
        }

        Ok((lines, reader.bytes_read()))
    }

    /// Sort lines byte-wise (descending when `reverse` is set).
    pub fn sort(&self, mut lines: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
        if self.reverse {
            lines.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            lines.sort_unstable();
        }
        lines
    }

    /// Write lines in order, verbatim.
    pub fn emit<W: Write>(&self, lines: &[Vec<u8>], output: &mut TextWriter<W>) -> Result<()> {
        for line in lines {
            output.write_bytes(line)?;
        }
        Ok(())
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let (lines, bytes_read) = self.collect(input)?;
        let lines = self.sort(lines);
        self.emit(&lines, output)?;

        Ok(Stats {
            inputs: 1,
            lines_read: lines.len() as u64,
            bytes_read,
            lines_written: lines.len() as u64,
        })
    }
}
