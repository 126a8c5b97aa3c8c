//! textutil: count, search, replace, slice, case-fold, dedupe, tally and sort text
//!
//! Usage: textutil <MODE> [OPTIONS] [FILE]...

use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use textutil::config::{Limits, DEFAULT_MAX_LINE_LEN, DEFAULT_MAX_WORD_LEN};
use textutil::output::{open_output, TextWriter};
use textutil::{Dispatcher, InputSource, Mode, TextError};

const PROGRAM: &str = "textutil";

#[derive(Parser, Debug)]
#[command(name = "textutil")]
#[command(version)]
#[command(about = "textutil: a text file processing utility", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["count", "find", "replace", "lines", "word_freq", "sort", "unique", "lower", "upper"])
))]
struct Cli {
    /// Count lines, words and characters
    #[arg(short = 'c')]
    count: bool,

    /// Print lines containing PATTERN (literal match)
    #[arg(short = 'f', value_name = "PATTERN", allow_hyphen_values = true)]
    find: Option<OsString>,

    /// Replace every occurrence of OLD with NEW
    #[arg(
        short = 'r',
        num_args = 2,
        action = ArgAction::Set,
        value_names = ["OLD", "NEW"],
        allow_hyphen_values = true
    )]
    replace: Option<Vec<OsString>>,

    /// Print lines START through END (1-based, inclusive)
    #[arg(short = 'l', num_args = 2, action = ArgAction::Set, value_names = ["START", "END"])]
    lines: Option<Vec<usize>>,

    /// Print a word frequency table
    #[arg(short = 'w')]
    word_freq: bool,

    /// Sort lines (byte order)
    #[arg(short = 's')]
    sort: bool,

    /// Suppress adjacent duplicate lines
    #[arg(short = 'u')]
    unique: bool,

    /// Convert to lowercase
    #[arg(short = 'L')]
    lower: bool,

    /// Convert to uppercase
    #[arg(short = 'U')]
    upper: bool,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Reverse the sort order (with -s)
    #[arg(short = 'R', long)]
    reverse: bool,

    /// Longest accepted input line in bytes, newline included
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_LINE_LEN)]
    max_line_length: usize,

    /// Longest accepted word in bytes (word frequency mode)
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_word_length: usize,

    /// Print run statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Input files (use - for stdin; none reads stdin)
    files: Vec<PathBuf>,
}

impl Cli {
    /// The single mode selected; clap's `mode` group guarantees exactly one.
    fn mode(&self) -> Result<Mode, TextError> {
        if self.reverse && !self.sort {
            return Err(TextError::Usage("-R/--reverse requires -s".to_string()));
        }
        if self.count {
            return Ok(Mode::Count);
        }
        if let Some(pattern) = &self.find {
            return Ok(Mode::Find {
                pattern: pattern.as_encoded_bytes().to_vec(),
            });
        }
        if let Some(args) = &self.replace {
            if let [old, new] = args.as_slice() {
                return Ok(Mode::Replace {
                    old: old.as_encoded_bytes().to_vec(),
                    new: new.as_encoded_bytes().to_vec(),
                });
            }
        }
        if let Some(range) = &self.lines {
            if let [start, end] = range.as_slice() {
                return Ok(Mode::PrintLines {
                    start: *start,
                    end: *end,
                });
            }
        }
        if self.word_freq {
            return Ok(Mode::WordFreq);
        }
        if self.sort {
            return Ok(Mode::Sort {
                reverse: self.reverse,
            });
        }
        if self.unique {
            return Ok(Mode::Unique);
        }
        if self.lower {
            return Ok(Mode::Lower);
        }
        if self.upper {
            return Ok(Mode::Upper);
        }
        Err(TextError::Usage("no operation selected".to_string()))
    }

    fn limits(&self) -> Limits {
        Limits::new()
            .with_max_line_len(self.max_line_length)
            .with_max_word_len(self.max_word_length)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                // Nothing useful to do if stdout is gone.
                let _ = e.print();
                process::exit(0);
            }
            _ => {
                eprint!("{}: {}", PROGRAM, e.render());
                process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", PROGRAM, e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TextError> {
    let mode = cli.mode()?;
    let dispatcher = Dispatcher::new(mode, cli.limits())?;
    let sources: Vec<InputSource> = cli.files.iter().map(InputSource::from_arg).collect();

    let sink = open_output(cli.output.as_deref())?;
    let mut writer = TextWriter::new(sink);

    tracing::debug!(
        mode = dispatcher.mode_name(),
        inputs = sources.len(),
        "starting run"
    );
    let stats = dispatcher.run(&sources, &mut writer)?;

    if cli.stats {
        eprintln!("{} stats: {}", dispatcher.mode_name(), stats);
    }

    Ok(())
}
