//! Count command implementation.
//!
//! Counts newlines, bytes and words in one pass. A word is a maximal run of
//! bytes other than space, tab and newline; other control bytes such as
//! `\r` belong to words.

use super::Stats;
use crate::input::Result;
use crate::output::TextWriter;
use std::io::{self, Read, Write};

const CHUNK_SIZE: usize = 64 * 1024;

/// Totals reported by the count command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

/// Word separators for counting.
#[inline]
fn is_separator(b: u8) -> bool {
    b == b' ' || b == b'\n' || b == b'\t'
}

/// Count command configuration.
#[derive(Debug, Clone, Default)]
pub struct CountCommand;

impl CountCommand {
    pub fn new() -> Self {
        Self
    }

    /// Count lines, words and bytes of a stream.
    pub fn count<R: Read>(&self, mut input: R) -> Result<Counts> {
        let mut counts = Counts::default();
        let mut in_word = false;
        let mut buf = vec![0u8; CHUNK_SIZE];

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            counts.chars += n as u64;
            for &b in &buf[..n] {
                if b == b'\n' {
                    counts.lines += 1;
                }
                if is_separator(b) {
                    in_word = false;
                } else if !in_word {
                    in_word = true;
                    counts.words += 1;
                }
            }
        }

        Ok(counts)
    }

    /// Count a stream and write `lines words chars name`.
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        name: &str,
        output: &mut TextWriter<W>,
    ) -> Result<Stats> {
        let counts = self.count(input)?;

        output.write_int_padded(counts.lines, 7)?;
        output.write_byte(b' ')?;
        output.write_int_padded(counts.words, 7)?;
        output.write_byte(b' ')?;
        output.write_int_padded(counts.chars, 7)?;
        output.write_byte(b' ')?;
        output.write_bytes(name.as_bytes())?;
        output.write_byte(b'\n')?;

        Ok(Stats {
            inputs: 1,
            lines_read: counts.lines,
            bytes_read: counts.chars,
            lines_written: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(content: &str) -> Counts {
        CountCommand::new().count(content.as_bytes()).unwrap()
    }

    #[test]
    fn test_count_basic() {
        assert_eq!(
            count("hello world\nfoo\n"),
            Counts {
                lines: 2,
                words: 3,
                chars: 16
            }
        );
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count(""), Counts::default());
    }

    #[test]
    fn test_count_no_trailing_newline() {
        let c = count("a b");
        assert_eq!(c.lines, 0);
        assert_eq!(c.words, 2);
        assert_eq!(c.chars, 3);
    }

    #[test]
    fn test_carriage_return_is_not_separator() {
        // "\r" glues "a" and "b" into one word.
        assert_eq!(count("a\rb\n").words, 1);
        assert_eq!(count("a\tb  c\n").words, 3);
    }

    #[test]
    fn test_run_output_format() {
        let mut out = Vec::new();
        {
            let mut writer = TextWriter::new(&mut out);
            let stats = CountCommand::new()
                .run(&b"one two\nthree\n"[..], "stdin", &mut writer)
                .unwrap();
            writer.flush().unwrap();
            assert_eq!(stats.lines_read, 2);
            assert_eq!(stats.bytes_read, 14);
        }
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "      2       3      14 stdin\n"
        );
    }
}
