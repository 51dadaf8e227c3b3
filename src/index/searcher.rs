//! The in-memory search index
//!
//! Owns the corpus and its suffix array. Construction is the only mutating
//! step; every query method takes `&self`, so one `Index` can serve any
//! number of threads behind an `Arc`.

use super::corpus::Corpus;
use super::suffix_array::{SuffixArray, SuffixArrayBuilder};
use super::types::{IndexError, IndexStats, SearchOptions};
use crate::query::extract::extract;
use std::path::Path;
use std::time::{Duration, Instant};

/// Suffix-array index over a single corpus
pub struct Index {
    corpus: Corpus,
    suffix_array: SuffixArray,
    build_time: Duration,
    valid_utf8: bool,
}

impl Index {
    /// Read the file at `path` and index it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let corpus = Corpus::open(path)?;
        tracing::debug!(
            path = %path.display(),
            bytes = corpus.len(),
            mapped = corpus.is_mapped(),
            "corpus opened"
        );

        let index = Self::build(corpus);
        tracing::info!(
            path = %path.display(),
            bytes = index.corpus.len(),
            build_ms = index.build_time.as_millis() as u64,
            "index built"
        );
        Ok(index)
    }

    /// Index an in-memory buffer
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, IndexError> {
        Ok(Self::build(Corpus::from_bytes(bytes.into())?))
    }

    fn build(corpus: Corpus) -> Self {
        let start = Instant::now();
        let suffix_array = SuffixArrayBuilder::new().build(corpus.as_bytes());
        let build_time = start.elapsed();
        let valid_utf8 = std::str::from_utf8(corpus.as_bytes()).is_ok();
        Self {
            corpus,
            suffix_array,
            build_time,
            valid_utf8,
        }
    }

    /// Raw corpus bytes
    pub fn text(&self) -> &[u8] {
        self.corpus.as_bytes()
    }

    /// The whole word around every occurrence of `query`, in corpus order
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_with(query, &SearchOptions::default())
    }

    /// Search with an explicit extraction mode and result limit
    ///
    /// Matches whose snippet is empty after trimming (a query made only of
    /// punctuation between two boundaries) are dropped.
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<String> {
        let text = self.text();
        let limit = options.limit.unwrap_or(usize::MAX);

        self.offsets(query)
            .into_iter()
            .map(|start| extract(text, start, start + query.len(), options.mode))
            .filter(|snippet| !snippet.is_empty())
            .take(limit)
            .collect()
    }

    /// Byte offsets of every occurrence of `query`, ascending
    pub fn offsets(&self, query: &str) -> Vec<usize> {
        let mut offsets: Vec<usize> = self
            .suffix_array
            .lookup(self.text(), query.as_bytes())
            .iter()
            .map(|&pos| pos as usize)
            .collect();
        offsets.sort_unstable();
        offsets
    }

    /// Number of occurrences of `query`
    pub fn count(&self, query: &str) -> usize {
        self.suffix_array.count(self.text(), query.as_bytes())
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            source: self.corpus.source().map(Path::to_path_buf),
            text_size: self.corpus.len(),
            suffix_count: self.suffix_array.len(),
            mapped: self.corpus.is_mapped(),
            valid_utf8: self.valid_utf8,
            build_time: self.build_time,
        }
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("source", &self.corpus.source())
            .field("text_size", &self.corpus.len())
            .field("build_time", &self.build_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SONNET: &str = "Shall I compare thee to a summer's day?\n\
                          Thou art more lovely and more temperate:\n\
                          Rough winds do shake the darling buds of May,\n\
                          And summer's lease hath all too short a date;";

    #[test]
    fn test_search_returns_words_in_corpus_order() {
        let index = Index::from_bytes(SONNET).unwrap();
        assert_eq!(index.search("mme"), vec!["summer", "summer"]);
        assert_eq!(index.search("ore"), vec!["more", "more"]);
        assert_eq!(index.search("dar"), vec!["darling"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let index = Index::from_bytes(SONNET).unwrap();
        assert_eq!(index.search("Thou"), vec!["Thou"]);
        assert!(index.search("THOU").is_empty());
    }

    #[test]
    fn test_search_empty_query() {
        let index = Index::from_bytes(SONNET).unwrap();
        assert!(index.search("").is_empty());
    }

    #[test]
    fn test_search_empty_corpus() {
        let index = Index::from_bytes(Vec::<u8>::new()).unwrap();
        assert!(index.search("anything").is_empty());
        assert_eq!(index.stats().suffix_count, 0);
    }

    #[test]
    fn test_search_with_limit() {
        let index = Index::from_bytes(SONNET).unwrap();
        let results = index.search_with("e", &SearchOptions::words().with_limit(3));
        assert_eq!(results, vec!["compare", "thee", "thee"]);
    }

    #[test]
    fn test_empty_snippets_do_not_count_against_limit() {
        // The first two commas sit between spaces and trim to nothing
        let index = Index::from_bytes(" , , one,two").unwrap();
        let options = SearchOptions::words().with_limit(1);
        assert_eq!(index.search_with(",", &options), vec!["one,two"]);
        assert_eq!(index.search(","), vec!["one,two"]);
        assert_eq!(index.count(","), 3);
    }

    #[test]
    fn test_stats_reports_invalid_utf8() {
        let index = Index::from_bytes(b"caf\xE9".to_vec()).unwrap();
        assert!(!index.stats().valid_utf8);
    }

    #[test]
    fn test_search_with_context() {
        let index = Index::from_bytes(SONNET).unwrap();
        let results = index.search_with("buds", &SearchOptions::context(10));
        assert_eq!(results, vec!["darling buds of May,"]);
    }

    #[test]
    fn test_offsets_sorted() {
        let index = Index::from_bytes("abcabcabc").unwrap();
        assert_eq!(index.offsets("bc"), vec![1, 4, 7]);
        assert_eq!(index.count("abc"), 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completeworks.txt");
        fs::write(&path, SONNET).unwrap();

        let index = Index::load(&path).unwrap();
        assert_eq!(index.search("lease"), vec!["lease"]);

        let stats = index.stats();
        assert_eq!(stats.source.as_deref(), Some(path.as_path()));
        assert_eq!(stats.text_size, SONNET.len());
        assert!(stats.valid_utf8);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Index::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, IndexError::Io { .. }));
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Index>();
    }
}
