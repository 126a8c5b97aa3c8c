//! Input sources and the bounded line reader.

use crate::config::Limits;
use memchr::memchr;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while processing text.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("can't open {}: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("cannot open output file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("line {line} exceeds maximum supported line length of {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("word exceeds maximum supported word length of {limit} bytes")]
    WordTooLong { limit: usize },

    #[error("out of memory")]
    OutOfMemory,

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, TextError>;

/// Name used for standard input in reports.
pub const STDIN_NAME: &str = "stdin";

/// Where a stream of text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Interpret a command-line operand; `-` means standard input.
    pub fn from_arg<P: AsRef<Path>>(arg: P) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(path.to_path_buf())
        }
    }

    /// Open the source for reading.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Path(path) => {
                let file = File::open(path).map_err(|source| TextError::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str(STDIN_NAME),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A line reader with an explicit upper bound on line length.
///
/// Lines are returned with their `\n` terminator; only the last line of a
/// stream may lack one. The internal buffer grows as needed but never past
/// `max_line_len`, so a runaway line is rejected without being buffered.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
    max_line_len: usize,
    line_number: usize,
    bytes_read: u64,
}

impl<R: Read> LineReader<R> {
    /// Create a reader using the given limits.
    pub fn new(reader: R, limits: &Limits) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: Vec::with_capacity(256),
            max_line_len: limits.max_line_len,
            line_number: 0,
            bytes_read: 0,
        }
    }

    /// Read the next line, or `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }

            let (take, done) = match memchr(b'\n', available) {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            };
            if self.buffer.len() + take > self.max_line_len {
                return Err(TextError::LineTooLong {
                    line: self.line_number + 1,
                    limit: self.max_line_len,
                });
            }
            self.buffer.extend_from_slice(&available[..take]);
            self.reader.consume(take);
            if done {
                break;
            }
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }
        self.line_number += 1;
        self.bytes_read += self.buffer.len() as u64;
        Ok(Some(&self.buffer))
    }

    /// Number of the line most recently returned (1-based, 0 before any read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Total bytes returned so far.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}
