//! Word frequency command.
//!
//! Builds a fresh [`FrequencyTable`] for each input and prints one
//! `count word` line per distinct word, in table order.

use super::Stats;
use crate::config::{Limits, DEFAULT_HASH_BUCKETS};
use crate::freq::FrequencyTable;
use crate::input::Result;
use crate::output::TextWriter;
use crate::words::WordScanner;
use std::io::{Read, Write};

/// Word frequency command configuration.
#[derive(Debug, Clone)]
pub struct WordFreqCommand {
    /// Bucket count of each table
    pub buckets: usize,
    limits: Limits,
}

impl Default for WordFreqCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl WordFreqCommand {
    pub fn new() -> Self {
        Self {
            buckets: DEFAULT_HASH_BUCKETS,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Scan a stream and tally its words.
    pub fn build<R: Read>(&self, input: R) -> Result<(FrequencyTable, u64)> {
        let mut scanner = WordScanner::new(input, &self.limits);
        let mut table = FrequencyTable::with_buckets(self.buckets);
        let mut total = 0u64;

        while let Some(word) = scanner.next_word()? {
            table.record(word)?;
            total += 1;
        }

        Ok((table, total))
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let (table, total) = self.build(input)?;
        tracing::debug!(words = total, distinct = table.len(), "word scan finished");

        let mut stats = Stats::for_input();
        for (word, count) in table.drain() {
            output.write_int_padded(count, 4)?;
            output.write_byte(b' ')?;
            output.write_bytes(&word)?;
            output.write_byte(b'\n')?;
            stats.lines_written += 1;
        }

        Ok(stats)
    }
}
