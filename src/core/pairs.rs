// pairs.rs - Enumeration of unique unordered index pairs

use std::ops::Range;

/// Number of unordered pairs over `n` items, `n·(n-1)/2`.
#[inline]
pub fn pair_count(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

/// Lazy, restartable enumeration of every pair `(i, j)` with `i < j < n`,
/// ordered by `i` then `j`.
///
/// Pairs are also addressable by rank (their position in that order), which
/// lets a batch `[start, end)` be enumerated without walking the pairs that
/// precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairEnumerator {
    n: usize,
}

impl PairEnumerator {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn total(&self) -> u64 {
        pair_count(self.n)
    }

    /// Iterate all pairs from the beginning.
    pub fn iter(&self) -> Pairs {
        self.range(0..self.total())
    }

    /// Iterate the pairs whose ranks fall in `ranks`.
    pub fn range(&self, ranks: Range<u64>) -> Pairs {
        let end = ranks.end.min(self.total());
        let start = ranks.start.min(end);
        let (i, j) = if start < end { self.unrank(start) } else { (0, 0) };
        Pairs {
            n: self.n,
            i,
            j,
            remaining: end - start,
        }
    }

    /// Split the full pair set into consecutive rank ranges of at most
    /// `batch_size` pairs.
    pub fn batches(&self, batch_size: usize) -> impl Iterator<Item = Range<u64>> {
        let total = self.total();
        let size = batch_size.max(1) as u64;
        let count = total.div_ceil(size);
        (0..count).map(move |b| {
            let start = b * size;
            start..(start + size).min(total)
        })
    }

    /// Rank of the first pair in row `i`.
    #[inline]
    fn row_start(&self, i: usize) -> u64 {
        let (n, i) = (self.n as u64, i as u64);
        i * (2 * n - i - 1) / 2
    }

    /// Position of `(i, j)` in enumeration order.
    pub fn rank(&self, i: usize, j: usize) -> u64 {
        debug_assert!(i < j && j < self.n);
        self.row_start(i) + (j - i - 1) as u64
    }

    /// Pair at position `k`; requires `k < total()`.
    pub fn unrank(&self, k: u64) -> (usize, usize) {
        debug_assert!(k < self.total());
        // Closed-form estimate of the row, then corrected for float rounding.
        let m = (2 * self.n - 1) as f64;
        let estimate = ((m - (m * m - 8.0 * k as f64).max(0.0).sqrt()) / 2.0).floor();
        let mut i = (estimate.max(0.0) as usize).min(self.n.saturating_sub(2));

        while i > 0 && self.row_start(i) > k {
            i -= 1;
        }
        while i + 1 < self.n && self.row_start(i + 1) <= k {
            i += 1;
        }

        let j = i + 1 + (k - self.row_start(i)) as usize;
        (i, j)
    }
}

impl IntoIterator for PairEnumerator {
    type Item = (usize, usize);
    type IntoIter = Pairs;

    fn into_iter(self) -> Pairs {
        self.iter()
    }
}

/// Iterator over a contiguous run of pairs.
#[derive(Debug, Clone)]
pub struct Pairs {
    n: usize,
    i: usize,
    j: usize,
    remaining: u64,
}

impl Iterator for Pairs {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<(usize, usize)> {
        if self.remaining == 0 {
            return None;
        }
        let pair = (self.i, self.j);
        self.remaining -= 1;
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Pairs {}
