//! Replace command implementation.
//!
//! Every non-overlapping occurrence of the old text is replaced, scanning
//! each line left to right. Replacement text is never rescanned.

use super::Stats;
use crate::config::Limits;
use crate::input::{LineReader, Result, TextError};
use crate::output::TextWriter;
use memchr::memmem;
use std::io::{Read, Write};

/// Replace command configuration.
#[derive(Debug, Clone)]
pub struct ReplaceCommand {
    finder: memmem::Finder<'static>,
    replacement: Vec<u8>,
    limits: Limits,
}

impl ReplaceCommand {
    /// Create a replace command. `old` must not be empty.
    pub fn new(old: &[u8], new: &[u8]) -> Result<Self> {
        if old.is_empty() {
            return Err(TextError::Usage(
                "replace pattern must not be empty".to_string(),
            ));
        }
        Ok(Self {
            finder: memmem::Finder::new(old).into_owned(),
            replacement: new.to_vec(),
            limits: Limits::default(),
        })
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Write `line` with all occurrences replaced. Returns the number of
    /// replacements made.
    pub fn replace_line<W: Write>(&self, line: &[u8], output: &mut TextWriter<W>) -> Result<usize> {
        let old_len = self.finder.needle().len();
        let mut rest = line;
        let mut replaced = 0;

        while let Some(pos) = self.finder.find(rest) {
            output.write_bytes(&rest[..pos])?;
            output.write_bytes(&self.replacement)?;
            rest = &rest[pos + old_len..];
            replaced += 1;
        }
        output.write_bytes(rest)?;

        Ok(replaced)
    }

    /// Copy a stream to `output`, replacing on every line.
    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let mut reader = LineReader::new(input, &self.limits);
        let mut stats = Stats::for_input();
        let mut replacements = 0usize;

        while let Some(line) = reader.read_line()? {
            replacements += self.replace_line(line, output)?;
            stats.lines_written += 1;
        }

        tracing::debug!(replacements, "replace finished");
        stats.lines_read = reader.line_number() as u64;
        stats.bytes_read = reader.bytes_read();
        Ok(stats)
    }
}
