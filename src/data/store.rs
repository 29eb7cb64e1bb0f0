// store.rs - Immutable store of equal-length barcode sequences

use crate::error::{HistogramError, Result};
use regex::Regex;

/// Ordered collection of validated, equal-length sequences.
///
/// Sequences are packed into one contiguous buffer with a fixed stride, so
/// indexed access is a slice into shared memory and the store can be handed
/// to any number of worker threads by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStore {
    data: Vec<u8>,
    width: usize,
    count: usize,
}

impl SequenceStore {
    /// Build a store from raw strings, failing on the first sequence whose
    /// length differs from the first one.
    pub fn new<I, S>(sequences: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self::build(sequences, |_, _| Ok(()))
    }

    /// Build a store and additionally require every sequence to match the
    /// alphabet pattern. Sequences are checked in order, length first, so the
    /// error always names the first offending index.
    pub fn with_alphabet<I, S>(sequences: I, alphabet: &Regex) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self::build(sequences, |index, sequence| {
            let text = String::from_utf8_lossy(sequence);
            if alphabet.is_match(&text) {
                return Ok(());
            }
            let symbol = text
                .chars()
                .find(|c| !alphabet.is_match(&c.to_string()))
                .unwrap_or('?');
            Err(HistogramError::InvalidSymbol { index, symbol })
        })
    }

    fn build<I, S, F>(sequences: I, mut check: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
        F: FnMut(usize, &[u8]) -> Result<()>,
    {
        let mut data = Vec::new();
        let mut width = 0;
        let mut count = 0;

        for (index, sequence) in sequences.into_iter().enumerate() {
            let sequence = sequence.as_ref();
            if index == 0 {
                width = sequence.len();
            } else if sequence.len() != width {
                return Err(HistogramError::LengthMismatch {
                    index,
                    expected: width,
                    found: sequence.len(),
                });
            }
            check(index, sequence)?;
            data.extend_from_slice(sequence);
            count += 1;
        }

        Ok(Self { data, width, count })
    }

    /// Number of sequences `n`.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Common sequence length `L` (0 for an empty store).
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.count {
            Some(self.sequence(index))
        } else {
            None
        }
    }

    /// Indexed access without the `Option`; panics when out of range.
    #[inline]
    pub fn sequence(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.data[start..start + self.width]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.count).map(move |i| self.sequence(i))
    }

    /// A new store holding the first `n` sequences.
    pub fn prefix(&self, n: usize) -> Self {
        let count = n.min(self.count);
        Self {
            data: self.data[..count * self.width].to_vec(),
            width: if count == 0 { 0 } else { self.width },
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_access() {
        let store = SequenceStore::new(["AAAA", "AACA", "TTTT"]).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.width(), 4);
        assert_eq!(store.get(1), Some(&b"AACA"[..]));
        assert_eq!(store.get(3), None);
        assert_eq!(store.iter().count(), 3);
    }

    #[test]
    fn test_empty_store_is_valid() {
        let store = SequenceStore::new(Vec::<String>::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.width(), 0);
    }

    #[test]
    fn test_length_mismatch_names_index() {
        let err = SequenceStore::new(["AAA", "AA"]).unwrap_err();
        match err {
            HistogramError::LengthMismatch { index, expected, found } => {
                assert_eq!(index, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_alphabet_restriction() {
        let alphabet = Regex::new("^[ACGT]*$").unwrap();
        assert!(SequenceStore::with_alphabet(["ACGT", "TTGA"], &alphabet).is_ok());

        let err = SequenceStore::with_alphabet(["ACGT", "ACNT"], &alphabet).unwrap_err();
        assert!(matches!(err, HistogramError::InvalidSymbol { index: 1, symbol: 'N' }));
    }

    #[test]
    fn test_alphabet_reports_first_failure() {
        let alphabet = Regex::new("^[ACGT]*$").unwrap();
        let err = SequenceStore::with_alphabet(["AAA", "AA", "AXA"], &alphabet).unwrap_err();
        assert!(matches!(err, HistogramError::LengthMismatch { index: 1, expected: 3, found: 2 }));

        let err = SequenceStore::with_alphabet(["AAA", "AXA", "AA"], &alphabet).unwrap_err();
        assert!(matches!(err, HistogramError::InvalidSymbol { index: 1, symbol: 'X' }));
    }

    #[test]
    fn test_prefix() {
        let store = SequenceStore::new(["AA", "AC", "AG"]).unwrap();
        let prefix = store.prefix(2);
        assert_eq!(prefix.len(), 2);
        assert_eq!(prefix.sequence(1), b"AC");
        assert!(store.prefix(0).is_empty());
        assert_eq!(store.prefix(10).len(), 3);
    }
}
