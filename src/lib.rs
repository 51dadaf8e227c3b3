//! # shakesearch - suffix-array full-text search
//!
//! Loads a static text corpus into memory, builds a suffix array over its raw
//! bytes and answers exact substring queries with the words (or bounded
//! context windows) around each match.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Corpus loading and the suffix array
//! - [`query`] - Snippet extraction and case variants
//! - [`server`] - HTTP front end
//! - [`output`] - Terminal rendering for one-shot searches
//! - [`utils`] - UTF-8 boundary helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use shakesearch::index::Index;
//!
//! let index = Index::load("completeworks.txt").unwrap();
//! for word in index.search("wherefore") {
//!     println!("{}", word);
//! }
//! ```
//!
//! Lookups are exact and case-sensitive. Front ends use
//! [`query::search_variants`] to also try the title- and upper-case
//! spellings of the query.

pub mod index;
pub mod logging;
pub mod output;
pub mod query;
pub mod server;
pub mod utils;

pub use index::{Index, IndexError, SearchOptions};
