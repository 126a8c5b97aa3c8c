//! Word scanner used by frequency counting.
//!
//! A word is a maximal run of ASCII alphanumerics starting with an ASCII
//! letter. Any other non-blank byte is produced as a one-byte token so the
//! caller can see it and skip it; `"123abc"` therefore scans as `1`, `2`,
//! `3`, `abc`.

use crate::config::Limits;
use crate::input::{Result, TextError};
use std::io::{self, BufRead, BufReader, Read};

/// One scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A word starting with a letter.
    Word(&'a [u8]),
    /// A single byte that cannot start a word.
    Other(u8),
}

/// Blank bytes between tokens (C `isspace` in the POSIX locale).
#[inline]
pub fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn fill<R: Read>(reader: &mut BufReader<R>) -> Result<&[u8]> {
    loop {
        match reader.fill_buf() {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
            Ok(_) => break,
        }
    }
    // Already buffered, so this does not touch the inner reader.
    Ok(reader.fill_buf()?)
}

/// Streaming tokenizer with a bounded word buffer.
pub struct WordScanner<R: Read> {
    reader: BufReader<R>,
    word: Vec<u8>,
    max_word_len: usize,
}

impl<R: Read> WordScanner<R> {
    pub fn new(reader: R, limits: &Limits) -> Self {
        Self {
            reader: BufReader::new(reader),
            word: Vec::with_capacity(32),
            max_word_len: limits.max_word_len,
        }
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'_>>> {
        // Skip blanks.
        let first = loop {
            let buf = fill(&mut self.reader)?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf.iter().position(|&b| !is_blank(b)) {
                Some(i) => {
                    let b = buf[i];
                    self.reader.consume(i + 1);
                    break b;
                }
                None => {
                    let n = buf.len();
                    self.reader.consume(n);
                }
            }
        };

        if !first.is_ascii_alphabetic() {
            return Ok(Some(Token::Other(first)));
        }

        self.word.clear();
        self.word.push(first);
        loop {
            let buf = fill(&mut self.reader)?;
            if buf.is_empty() {
                break;
            }
            let run = buf
                .iter()
                .position(|b| !b.is_ascii_alphanumeric())
                .unwrap_or(buf.len());
            if self.word.len() + run > self.max_word_len {
                return Err(TextError::WordTooLong {
                    limit: self.max_word_len,
                });
            }
            self.word.extend_from_slice(&buf[..run]);
            let ended = run < buf.len();
            self.reader.consume(run);
            if ended {
                break;
            }
        }
        if self.word.len() > self.max_word_len {
            return Err(TextError::WordTooLong {
                limit: self.max_word_len,
            });
        }

        Ok(Some(Token::Word(&self.word)))
    }

    /// Scan the next word, skipping non-word tokens.
    pub fn next_word(&mut self) -> Result<Option<&[u8]>> {
        loop {
            let is_word = match self.next_token()? {
                None => return Ok(None),
                Some(Token::Word(_)) => true,
                Some(Token::Other(_)) => false,
            };
            if is_word {
                return Ok(Some(&self.word));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(content: &str) -> Vec<String> {
        let mut scanner = WordScanner::new(content.as_bytes(), &Limits::default());
        let mut out = Vec::new();
        while let Some(w) = scanner.next_word().unwrap() {
            out.push(String::from_utf8(w.to_vec()).unwrap());
        }
        out
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(words("the cat sat\n"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_alphanumeric_tail() {
        assert_eq!(words("abc123 x9y"), vec!["abc123", "x9y"]);
    }

    #[test]
    fn test_leading_digits_split_off() {
        assert_eq!(words("123abc"), vec!["abc"]);
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(words("foo-bar, baz_qux!"), vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn test_all_blank_kinds() {
        assert_eq!(words("a\tb\x0bc\x0cd\re\n"), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_tokens_include_other() {
        let mut scanner = WordScanner::new(&b" 7a "[..], &Limits::default());
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Other(b'7')));
        assert_eq!(scanner.next_token().unwrap(), Some(Token::Word(&b"a"[..])));
        assert_eq!(scanner.next_token().unwrap(), None);
    }

    /// Fails with `Interrupted` once, then reads from `data`.
    struct InterruptOnce<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for InterruptOnce<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let reader = InterruptOnce {
            data: b"one two one",
            interrupted: false,
        };
        let mut scanner = WordScanner::new(reader, &Limits::default());
        assert_eq!(scanner.next_word().unwrap(), Some(&b"one"[..]));
        assert_eq!(scanner.next_word().unwrap(), Some(&b"two"[..]));
        assert_eq!(scanner.next_word().unwrap(), Some(&b"one"[..]));
        assert_eq!(scanner.next_word().unwrap(), None);
    }

    #[test]
    fn test_word_at_limit() {
        let limits = Limits::new().with_max_word_len(3);
        let mut scanner = WordScanner::new(&b"abc"[..], &limits);
        assert_eq!(scanner.next_word().unwrap(), Some(&b"abc"[..]));
    }

    #[test]
    fn test_word_too_long() {
        let limits = Limits::new().with_max_word_len(3);
        let mut scanner = WordScanner::new(&b"ab abcd"[..], &limits);
        assert_eq!(scanner.next_word().unwrap(), Some(&b"ab"[..]));
        assert!(matches!(
            scanner.next_word(),
            Err(TextError::WordTooLong { limit: 3 })
        ));
    }
}
