//! Buffered output for every textutil operation.
//!
//! Uses itoa for integer formatting to avoid allocation per report line.

use crate::input::{Result, TextError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffer size for TextWriter (256 KB default).
const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

const PADDING: [u8; 16] = [b' '; 16];

/// Open the output sink: the named file, or stdout when `path` is `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p).map_err(|source| TextError::CreateOutput {
                path: p.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Buffered text writer.
pub struct TextWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> TextWriter<W> {
    /// Create a new TextWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new TextWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Write a line, adding `\n` if it has none.
    #[inline]
    pub fn write_terminated(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        if line.last() != Some(&b'\n') {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Write an integer using itoa.
    #[inline]
    pub fn write_int<I: itoa::Integer>(&mut self, n: I) -> Result<()> {
        self.writer.write_all(self.itoa_buf.format(n).as_bytes())?;
        Ok(())
    }

    /// Write an integer right-aligned in a field of `width` bytes (`%*d`).
    pub fn write_int_padded<I: itoa::Integer>(&mut self, n: I, width: usize) -> Result<()> {
        let digits = self.itoa_buf.format(n).as_bytes();
        let mut pad = width.saturating_sub(digits.len());
        while pad > 0 {
            let chunk = pad.min(PADDING.len());
            self.writer.write_all(&PADDING[..chunk])?;
            pad -= chunk;
        }
        self.writer.write_all(digits)?;
        Ok(())
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) -> Result<()> {
        self.writer.write_all(&[b])?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut TextWriter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut output = Vec::new();
        {
            let mut writer = TextWriter::new(&mut output);
            f(&mut writer).unwrap();
            writer.flush().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_int_padded() {
        assert_eq!(render(|w| w.write_int_padded(42u64, 7)), "     42");
        assert_eq!(render(|w| w.write_int_padded(12345678u64, 7)), "12345678");
        assert_eq!(render(|w| w.write_int_padded(3u64, 20)), format!("{:20}", 3));
    }

    #[test]
    fn test_write_terminated() {
        assert_eq!(render(|w| w.write_terminated(b"abc")), "abc\n");
        assert_eq!(render(|w| w.write_terminated(b"abc\n")), "abc\n");
    }

    #[test]
    fn test_write_mixed() {
        let out = render(|w| {
            w.write_int(7usize)?;
            w.write_byte(b':')?;
            w.write_bytes(b" x")
        });
        assert_eq!(out, "7: x");
    }

    #[test]
    fn test_open_output_bad_path() {
        let err = open_output(Some(Path::new("/nonexistent/dir/out.txt")))
            .err()
            .unwrap();
        assert!(matches!(err, TextError::CreateOutput { .. }));
    }
}
