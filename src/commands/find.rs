//! Find command implementation.
//!
//! Literal substring search, reported as `name:lineno: line`.

use super::Stats;
use crate::config::Limits;
use crate::input::{LineReader, Result};
use crate::output::TextWriter;
use memchr::memmem;
use std::io::{Read, Write};

/// Find command configuration.
#[derive(Debug, Clone)]
pub struct FindCommand {
    finder: memmem::Finder<'static>,
    limits: Limits,
}

impl FindCommand {
    pub fn new(pattern: &[u8]) -> Self {
        Self {
            finder: memmem::Finder::new(pattern).into_owned(),
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The pattern being searched for.
    pub fn pattern(&self) -> &[u8] {
        self.finder.needle()
    }

    /// Whether `line` contains the pattern. An empty pattern matches everything.
    #[inline]
    pub fn matches(&self, line: &[u8]) -> bool {
        self.finder.find(line).is_some()
    }

    /// Print every matching line of a stream.
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        name: &str,
        output: &mut TextWriter<W>,
    ) -> Result<Stats> {
        let mut reader = LineReader::new(input, &self.limits);
        let mut stats = Stats::for_input();
        let mut lineno = 0usize;

        while let Some(line) = reader.read_line()? {
            lineno += 1;
            if !self.matches(line) {
                continue;
            }
            output.write_bytes(name.as_bytes())?;
            output.write_byte(b':')?;
            output.write_int(lineno)?;
            output.write_bytes(b": ")?;
            output.write_terminated(line)?;
            stats.lines_written += 1;
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

    fn find(pattern: &str, content: &str) -> String {
        let mut out = Vec::new();
        {
            let mut writer = TextWriter::new(&mut out);
            FindCommand::new(pattern.as_bytes())
                .run(content.as_bytes(), "f.txt", &mut writer)
                .unwrap();
            writer.flush().unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_find_matches_with_line_numbers() {
        let out = find("cat", "the cat\na dog\nconcatenate\n");
        assert_eq!(out, "f.txt:1: the cat\nf.txt:3: concatenate\n");
    }

    #[test]
    fn test_find_no_match() {
        assert_eq!(find("zebra", "the cat\n"), "");
    }

    #[test]
    fn test_find_is_literal() {
        assert_eq!(find("a.c", "abc\na.c\n"), "f.txt:2: a.c\n");
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        assert_eq!(find("", "x\ny"), "f.txt:1: x\nf.txt:2: y\n");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(find("Cat", "cat\nCat\n"), "f.txt:2: Cat\n");
    }

    #[test]
    fn test_matches_helper() {
        let cmd = FindCommand::new(b"ab");
        assert_eq!(cmd.pattern(), b"ab");
        assert!(cmd.matches(b"xaby"));
        assert!(!cmd.matches(b"a b"));
    }

    #[test]
    fn test_long_line_rejected() {
        let cmd = FindCommand::new(b"x").with_limits(Limits::new().with_max_line_len(3));
        let mut out = Vec::new();
        let mut writer = TextWriter::new(&mut out);
        let err = cmd.run(&b"x\nxxxx\n"[..], "f", &mut writer).unwrap_err();
        assert!(matches!(err, TextError::LineTooLong { line: 2, limit: 3 }));
    }
}
