//! Utility functions shared by the index and the query layer.
//!
//! ## Modules
//!
//! - [`text`] - UTF-8 aware boundary detection over raw bytes
//! - [`progress`] - Spinner shown while the suffix array sorts
//!
//! ```no_run
//! use shakesearch::utils::{decode_backward, is_boundary};
//!
//! let text = "to be, or not".as_bytes();
//! let (prev, width) = decode_backward(text, 5);
//! assert_eq!(prev, Some('e'));
//! assert_eq!(width, 1);
//! assert!(is_boundary(','));
//! ```

pub mod progress;
pub mod text;

pub use text::*;
