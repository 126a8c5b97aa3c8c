//! Word frequency table.
//!
//! An open-chaining hash table with a fixed bucket count. Each bucket is a
//! chain of entries; new entries go to the head of their chain. Tables are
//! built per run and consumed by [`FrequencyTable::drain`].

use crate::config::DEFAULT_HASH_BUCKETS;
use crate::input::{Result, TextError};

/// One distinct word and the number of times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub name: Vec<u8>,
    pub count: u64,
}

/// Polynomial string hash (`h = byte + 31 * h`) reduced to a bucket index.
#[inline]
pub fn hash(word: &[u8], buckets: usize) -> usize {
    let h = word
        .iter()
        .fold(0u32, |h, &b| u32::from(b).wrapping_add(h.wrapping_mul(31)));
    h as usize % buckets
}

/// Fixed-bucket word frequency table.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    // Chains are stored tail-first; the head is the last element.
    buckets: Box<[Vec<WordEntry>]>,
    len: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_HASH_BUCKETS)
    }

    /// Create a table with `n` buckets (at least one).
    pub fn with_buckets(n: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); n.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Find the entry for `word`.
    pub fn lookup(&self, word: &[u8]) -> Option<&WordEntry> {
        self.buckets[hash(word, self.buckets.len())]
            .iter()
            .rev()
            .find(|e| e.name == word)
    }

    /// Return the entry for `word`, inserting one with a zero count if absent.
    pub fn install(&mut self, word: &[u8]) -> Result<&mut WordEntry> {
        let slot = hash(word, self.buckets.len());
        let chain = &mut self.buckets[slot];

        let pos = match chain.iter().rposition(|e| e.name == word) {
            Some(pos) => pos,
            None => {
                let mut name = Vec::new();
                name.try_reserve_exact(word.len())
                    .map_err(|_| TextError::OutOfMemory)?;
                name.extend_from_slice(word);
                chain.try_reserve(1).map_err(|_| TextError::OutOfMemory)?;
                chain.push(WordEntry { name, count: 0 });
                self.len += 1;
                chain.len() - 1
            }
        };
        Ok(&mut chain[pos])
    }

    /// Count one occurrence of `word`, returning its new count.
    pub fn record(&mut self, word: &[u8]) -> Result<u64> {
        let entry = self.install(word)?;
        entry.count += 1;
        Ok(entry.count)
    }

    /// Consume the table, yielding `(word, count)` in bucket order.
    ///
    /// The order is an artifact of the hash and must not be relied upon.
    pub fn drain(self) -> Drain {
        Drain {
            buckets: self.buckets.into_vec().into_iter(),
            chain: Vec::new(),
        }
    }
}

/// Iterator returned by [`FrequencyTable::drain`].
pub struct Drain {
    buckets: std::vec::IntoIter<Vec<WordEntry>>,
    chain: Vec<WordEntry>,
}

impl Iterator for Drain {
    type Item = (Vec<u8>, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.pop() {
                return Some((entry.name, entry.count));
            }
            self.chain = self.buckets.next()?;
        }
    }
}
