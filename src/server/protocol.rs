//! Request and response shapes for the HTTP interface
//!
//! `GET /search` takes its parameters from the query string and answers with
//! a bare JSON array of strings. The other endpoints answer with the
//! structs below.

use crate::index::{DEFAULT_CONTEXT_RADIUS, ExtractMode, IndexStats, SearchOptions};
use serde::{Deserialize, Serialize};

/// Hard cap on results per request, also applied when no limit is given
pub const MAX_RESULTS_CAP: usize = 1_000_000;

/// Snippet style requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Word,
    Context,
}

/// Query-string parameters of `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// The search query
    pub q: Option<String>,
    /// `word` (default) or `context`
    #[serde(default)]
    pub mode: Mode,
    /// Context radius in bytes, only used with `mode=context`
    pub radius: Option<usize>,
    /// Maximum number of results; 0 or absent means all (up to the cap)
    pub limit: Option<usize>,
}

impl SearchParams {
    /// The non-empty query, if one was given
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Resolve into search options, bounded by `max_results`
    pub fn options(&self, default_radius: usize, max_results: usize) -> SearchOptions {
        let mode = match self.mode {
            Mode::Word => ExtractMode::Word,
            Mode::Context => ExtractMode::Context {
                radius: self.radius.unwrap_or(default_radius),
            },
        };

        let cap = max_results.min(MAX_RESULTS_CAP);
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit.min(cap),
            _ => cap,
        };

        SearchOptions {
            mode,
            limit: Some(limit),
        }
    }
}

/// Per-server defaults applied to every search request
#[derive(Debug, Clone, Copy)]
pub struct ServerLimits {
    pub context_radius: usize,
    pub max_results: usize,
}

impl Default for ServerLimits {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            max_results: MAX_RESULTS_CAP,
        }
    }
}

/// `GET /stats` response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Total queries served
    pub queries_served: u64,
    /// Approximate index memory in bytes
    pub memory_bytes: usize,
    pub index: IndexStats,
}
