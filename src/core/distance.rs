// distance.rs - Hamming distance between equal-length sequences

use crate::error::{HistogramError, Result};

/// Count of positions at which two sequences differ.
pub type Distance = usize;

/// Hamming distance between `a` and `b`.
///
/// Fails with `LengthMismatch` when the lengths differ; `index` is 1 because
/// the right-hand operand is reported as the offender.
#[inline]
pub fn hamming(a: &[u8], b: &[u8]) -> Result<Distance> {
    if a.len() != b.len() {
        return Err(HistogramError::LengthMismatch {
            index: 1,
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(hamming_unchecked(a, b))
}

/// Position-wise comparison without the length check. Callers must pass
/// slices of equal length (anything past the shorter one is ignored).
#[inline]
pub fn hamming_unchecked(a: &[u8], b: &[u8]) -> Distance {
    a.iter().zip(b).map(|(x, y)| (x != y) as Distance).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(hamming(b"AAAA", b"AACA").unwrap(), 1);
        assert_eq!(hamming(b"AAAA", b"TTTT").unwrap(), 4);
        assert_eq!(hamming(b"AACA", b"TTTT").unwrap(), 4);
        assert_eq!(hamming(b"AACA", b"TTCT").unwrap(), 3);
        assert_eq!(hamming(b"", b"").unwrap(), 0);
    }

    #[test]
    fn test_reflexive_and_symmetric() {
        let barcodes: [&[u8]; 4] = [b"ACGTAC", b"ACGTTT", b"GGGGGG", b"ACGTAC"];
        for a in barcodes {
            assert_eq!(hamming(a, a).unwrap(), 0);
            for b in barcodes {
                assert_eq!(hamming(a, b).unwrap(), hamming(b, a).unwrap());
            }
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = hamming(b"AAA", b"AA").unwrap_err();
        assert!(matches!(
            err,
            HistogramError::LengthMismatch { index: 1, expected: 3, found: 2 }
        ));
    }
}
