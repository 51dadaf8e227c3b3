use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Byte offset into the corpus
pub type TextPosition = usize;

/// Suffix array entry - byte offset of a suffix in the corpus
pub type SuffixEntry = u32;

/// Largest corpus a `u32` suffix array can address
pub const MAX_CORPUS_SIZE: u64 = SuffixEntry::MAX as u64;

/// Errors raised while loading or building an index
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus is {size} bytes; at most {MAX_CORPUS_SIZE} bytes can be indexed")]
    CorpusTooLarge { size: u64 },
}

/// How a raw match offset is turned into a result string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// The whole word(s) containing the match
    #[default]
    Word,
    /// Up to `radius` bytes of text on each side of the match
    Context { radius: usize },
}

/// Default context radius in bytes
pub const DEFAULT_CONTEXT_RADIUS: usize = 120;

/// Per-query options
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub mode: ExtractMode,
    /// Maximum number of results; `None` returns every match
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn words() -> Self {
        Self::default()
    }

    pub fn context(radius: usize) -> Self {
        Self {
            mode: ExtractMode::Context { radius },
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Statistics about a loaded index
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// File the corpus was loaded from, if any
    pub source: Option<PathBuf>,
    /// Corpus size in bytes
    pub text_size: usize,
    /// Number of suffixes (equals text_size)
    pub suffix_count: usize,
    /// Whether the corpus is memory-mapped rather than owned
    pub mapped: bool,
    /// Whether the corpus is valid UTF-8
    pub valid_utf8: bool,
    /// Time spent sorting the suffix array
    #[serde(serialize_with = "serialize_duration_ms")]
    pub build_time: Duration,
}

impl IndexStats {
    /// Approximate resident size: corpus plus 4 bytes per suffix
    pub fn memory_bytes(&self) -> usize {
        self.text_size + self.suffix_count * std::mem::size_of::<SuffixEntry>()
    }
}

fn serialize_duration_ms<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}
