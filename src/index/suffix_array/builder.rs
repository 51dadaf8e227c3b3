//! Suffix array builder
//!
//! Builds a suffix array from the corpus by sorting all suffix positions,
//! in parallel for large inputs.

use super::reader::SuffixArray;
use crate::index::types::SuffixEntry;
use rayon::prelude::*;

/// Texts at least this long are sorted on the rayon pool
const PARALLEL_THRESHOLD: usize = 100_000;

/// Builder for constructing suffix arrays
#[derive(Debug, Clone)]
pub struct SuffixArrayBuilder {
    parallel_threshold: usize,
}

impl Default for SuffixArrayBuilder {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SuffixArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the size above which sorting goes parallel
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the suffix array for `text`
    ///
    /// The caller guarantees `text.len()` fits in a [`SuffixEntry`].
    pub fn build(&self, text: &[u8]) -> SuffixArray {
        if text.is_empty() {
            return SuffixArray::from_sorted(Vec::new());
        }

        let parallel = text.len() >= self.parallel_threshold;
        SuffixArray::from_sorted(build_prefix_doubling(text, parallel))
    }
}

/// Build suffix array by prefix doubling
///
/// Round `k` sorts suffixes by their first `2k` bytes, using the ranks of the
/// previous round as a (rank[i], rank[i + k]) sort key. It stops once every
/// rank is distinct.
///
/// Time: O(n log^2 n) regardless of how repetitive the text is
/// Space: O(n) for the array plus two rank buffers
fn build_prefix_doubling(text: &[u8], parallel: bool) -> Vec<SuffixEntry> {
    let n = text.len();

    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();
    // Rank 0 is reserved for "past the end", which sorts first.
    let mut rank: Vec<SuffixEntry> = text.iter().map(|&b| b as SuffixEntry + 1).collect();
    let mut next_rank: Vec<SuffixEntry> = vec![0; n];
    let mut k = 1;

    loop {
        let key = |i: SuffixEntry| {
            let i = i as usize;
            (rank[i], if i + k < n { rank[i + k] } else { 0 })
        };

        if parallel {
            sa.par_sort_unstable_by_key(|&i| key(i));
        } else {
            sa.sort_unstable_by_key(|&i| key(i));
        }

        next_rank[sa[0] as usize] = 1;
        for w in 1..n {
            let step = (key(sa[w - 1]) != key(sa[w])) as SuffixEntry;
            next_rank[sa[w] as usize] = next_rank[sa[w - 1] as usize] + step;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[sa[n - 1] as usize] as usize == n {
            break;
        }
        k *= 2;
    }

    sa
}
