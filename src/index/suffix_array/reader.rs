//! Suffix array lookup
//!
//! All suffixes starting with a pattern form one contiguous run of the
//! sorted array; a lookup is two binary searches for its ends.

use crate::index::types::SuffixEntry;

/// A sorted array of suffix offsets into some text
#[derive(Debug, Clone, Default)]
pub struct SuffixArray {
    entries: Vec<SuffixEntry>,
}

impl SuffixArray {
    /// Wrap an already-sorted array (see [`SuffixArrayBuilder`](super::SuffixArrayBuilder))
    pub(crate) fn from_sorted(entries: Vec<SuffixEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SuffixEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array
    /// where all suffixes start with the pattern.
    pub fn search(&self, text: &[u8], pattern: &[u8]) -> (usize, usize) {
        if pattern.is_empty() || self.entries.is_empty() {
            return (0, 0);
        }

        let lo = self.lower_bound(text, pattern);
        let hi = self.upper_bound(text, pattern, lo);
        (lo, hi)
    }

    /// Offsets of every occurrence of `pattern`, in suffix order
    pub fn lookup(&self, text: &[u8], pattern: &[u8]) -> &[SuffixEntry] {
        let (lo, hi) = self.search(text, pattern);
        &self.entries[lo..hi]
    }

    /// Get the number of matches for a pattern
    pub fn count(&self, text: &[u8], pattern: &[u8]) -> usize {
        let (lo, hi) = self.search(text, pattern);
        hi - lo
    }

    /// Check if pattern occurs in the text
    pub fn contains(&self, text: &[u8], pattern: &[u8]) -> bool {
        let (lo, hi) = self.search(text, pattern);
        lo < hi
    }

    /// First index whose suffix is >= pattern (compared on pattern length)
    fn lower_bound(&self, text: &[u8], pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &text[self.entries[mid] as usize..];

            let cmp_len = pattern.len().min(suffix.len());
            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// First index at or after `start` whose suffix does NOT start with pattern
    fn upper_bound(&self, text: &[u8], pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = &text[self.entries[mid] as usize..];

            if suffix.starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }
}

#[cfg(test)]
mod tests {
    use crate::index::suffix_array::SuffixArrayBuilder;

    const TEXT: &[u8] = b"hello world\nworld hello\nfoo bar baz";

    #[test]
    fn test_lookup_finds_all_occurrences() {
        let sa = SuffixArrayBuilder::new().build(TEXT);

        let mut hits = sa.lookup(TEXT, b"hello").to_vec();
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 18]);
    }

    #[test]
    fn test_lookup_no_match() {
        let sa = SuffixArrayBuilder::new().build(TEXT);
        assert!(sa.lookup(TEXT, b"notfound").is_empty());
        assert!(!sa.contains(TEXT, b"notfound"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let sa = SuffixArrayBuilder::new().build(TEXT);
        assert!(sa.lookup(TEXT, b"HELLO").is_empty());
    }

    #[test]
    fn test_empty_pattern() {
        let sa = SuffixArrayBuilder::new().build(TEXT);
        assert_eq!(sa.search(TEXT, b""), (0, 0));
        assert_eq!(sa.count(TEXT, b""), 0);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let text = b"abc";
        let sa = SuffixArrayBuilder::new().build(text);
        assert_eq!(sa.count(text, b"abcd"), 0);
    }

    #[test]
    fn test_count_overlapping() {
        let text = b"aaaa";
        let sa = SuffixArrayBuilder::new().build(text);
        assert_eq!(sa.count(text, b"aa"), 3);
        assert_eq!(sa.count(text, b"a"), 4);
    }

    #[test]
    fn test_multibyte_pattern() {
        let text = "naïve café, café noir".as_bytes();
        let sa = SuffixArrayBuilder::new().build(text);
        assert_eq!(sa.count(text, "café".as_bytes()), 2);
        assert_eq!(sa.count(text, "ï".as_bytes()), 1);
    }
}
