//! ASCII case conversion.
//!
//! Works on raw byte chunks rather than lines, so no line length limit
//! applies. Bytes outside `A-Z`/`a-z` pass through unchanged.

use super::Stats;
use crate::input::Result;
use crate::output::TextWriter;
use std::io::{self, Read, Write};

const CHUNK_SIZE: usize = 64 * 1024;

/// Direction of the case map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Lower,
    Upper,
}

/// Case conversion command configuration.
#[derive(Debug, Clone)]
pub struct CaseCommand {
    pub mode: CaseMode,
}

impl CaseCommand {
    pub fn new(mode: CaseMode) -> Self {
        Self { mode }
    }

    pub fn lower() -> Self {
        Self::new(CaseMode::Lower)
    }

    pub fn upper() -> Self {
        Self::new(CaseMode::Upper)
    }

    /// Convert a buffer in place.
    #[inline]
    pub fn convert(&self, bytes: &mut [u8]) {
        match self.mode {
            CaseMode::Lower => bytes.make_ascii_lowercase(),
            CaseMode::Upper => bytes.make_ascii_uppercase(),
        }
    }

    pub fn run<R: Read, W: Write>(&self, mut input: R, output: &mut TextWriter<W>) -> Result<Stats> {
        let mut stats = Stats::for_input();
        let mut buf = vec![0u8; CHUNK_SIZE];

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let chunk = &mut buf[..n];
            self.convert(chunk);
            output.write_bytes(chunk)?;

            stats.bytes_read += n as u64;
            stats.lines_read += memchr::memchr_iter(b'\n', chunk).count() as u64;
        }

        stats.lines_written = stats.lines_read;
        Ok(stats)
    }
}
