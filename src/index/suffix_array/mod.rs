//! Suffix array indexing module
//!
//! Provides O(m log n) exact substring search over the whole corpus.
//!
//! ## Architecture
//!
//! - `builder`: Sorts every suffix position of the corpus
//! - `reader`: Binary-search lookup over the sorted positions
//!
//! The array stores only offsets; the text itself stays in the
//! [`Corpus`](crate::index::corpus::Corpus) and is passed to each lookup.

pub mod builder;
pub mod reader;

pub use builder::SuffixArrayBuilder;
pub use reader::SuffixArray;
