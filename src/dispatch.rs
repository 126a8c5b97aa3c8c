//! Operation dispatch.
//!
//! One [`Mode`] is chosen per invocation and applied to each input in
//! order. Every input gets fresh operation state; the first failure stops
//! the run after flushing what was already produced.

use crate::commands::{
    CaseCommand, CountCommand, FindCommand, PrintLinesCommand, ReplaceCommand, SortCommand, Stats,
    UniqueCommand, WordFreqCommand,
};
use crate::config::Limits;
use crate::input::{InputSource, Result};
use crate::output::TextWriter;
use std::io::{Read, Write};

/// The operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Count,
    Find { pattern: Vec<u8> },
    Replace { old: Vec<u8>, new: Vec<u8> },
    PrintLines { start: usize, end: usize },
    WordFreq,
    Sort { reverse: bool },
    Unique,
    Lower,
    Upper,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Count => "count",
            Mode::Find { .. } => "find",
            Mode::Replace { .. } => "replace",
            Mode::PrintLines { .. } => "printlines",
            Mode::WordFreq => "wordfreq",
            Mode::Sort { .. } => "sort",
            Mode::Unique => "unique",
            Mode::Lower => "lowercase",
            Mode::Upper => "uppercase",
        }
    }
}

/// A configured command ready to run.
#[derive(Debug, Clone)]
enum Operation {
    Count(CountCommand),
    Find(FindCommand),
    Replace(ReplaceCommand),
    PrintLines(PrintLinesCommand),
    WordFreq(WordFreqCommand),
    Sort(SortCommand),
    Unique(UniqueCommand),
    Case(CaseCommand),
}

/// Runs one operation over a list of inputs.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    mode: &'static str,
    op: Operation,
}

impl Dispatcher {
    /// Build the command for `mode`, validating its arguments.
    pub fn new(mode: Mode, limits: Limits) -> Result<Self> {
        let name = mode.name();
        let op = match mode {
            Mode::Count => Operation::Count(CountCommand::new()),
            Mode::Find { pattern } => {
                Operation::Find(FindCommand::new(&pattern).with_limits(limits))
            }
            Mode::Replace { old, new } => {
                Operation::Replace(ReplaceCommand::new(&old, &new)?.with_limits(limits))
            }
            Mode::PrintLines { start, end } => {
                Operation::PrintLines(PrintLinesCommand::new(start, end).with_limits(limits))
            }
            Mode::WordFreq => Operation::WordFreq(WordFreqCommand::new().with_limits(limits)),
            Mode::Sort { reverse } => Operation::Sort(
                SortCommand::new()
                    .with_limits(limits)
                    .with_reverse(reverse),
            ),
            Mode::Unique => Operation::Unique(UniqueCommand::new().with_limits(limits)),
            Mode::Lower => Operation::Case(CaseCommand::lower()),
            Mode::Upper => Operation::Case(CaseCommand::upper()),
        };
        Ok(Self { mode: name, op })
    }

    /// Name of the selected operation.
    pub fn mode_name(&self) -> &'static str {
        self.mode
    }

    /// Apply the operation to one stream. `name` labels count and find output.
    pub fn run_input<R: Read, W: Write>(
        &self,
        input: R,
        name: &str,
        output: &mut TextWriter<W>,
    ) -> Result<Stats> {
        match &self.op {
            Operation::Count(cmd) => cmd.run(input, name, output),
            Operation::Find(cmd) => cmd.run(input, name, output),
            Operation::Replace(cmd) => cmd.run(input, output),
            Operation::PrintLines(cmd) => cmd.run(input, output),
            Operation::WordFreq(cmd) => cmd.run(input, output),
            Operation::Sort(cmd) => cmd.run(input, output),
            Operation::Unique(cmd) => cmd.run(input, output),
            Operation::Case(cmd) => cmd.run(input, output),
        }
    }

    /// Apply the operation to every source in order; no sources means stdin.
    ///
    /// Output is flushed before an error is returned.
    pub fn run<W: Write>(
        &self,
        sources: &[InputSource],
        output: &mut TextWriter<W>,
    ) -> Result<Stats> {
        let stdin = [InputSource::Stdin];
        let sources = if sources.is_empty() { &stdin[..] } else { sources };
        let mut stats = Stats::default();

        for source in sources {
            tracing::debug!(mode = self.mode, input = %source, "processing input");
            let result = source
                .open()
                .and_then(|reader| self.run_input(reader, &source.to_string(), output));
            match result {
                Ok(s) => {
                    tracing::info!(input = %source, lines = s.lines_read, "input done");
                    stats.merge(s);
                }
                Err(e) => {
                    // Keep earlier output; the open or read error wins.
                    if let Err(flush_err) = output.flush() {
                        tracing::warn!(error = %flush_err, "flush failed after error");
                    }
                    return Err(e);
                }
            }
        }

        output.flush()?;
        Ok(stats)
    }
}
