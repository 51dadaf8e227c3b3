pub mod extract;
pub mod variants;

pub use extract::{context_at, extract, word_at};
pub use variants::{case_variants, title_case};

use crate::index::{Index, SearchOptions};

/// Search every case variant of `query`, concatenating results in
/// variant order (lower, title, upper).
///
/// This is what the HTTP and CLI front ends run; [`Index::search`] itself
/// stays exact and case-sensitive. A limit applies to the combined list.
pub fn search_variants(index: &Index, query: &str, options: &SearchOptions) -> Vec<String> {
    let mut results = Vec::new();

    for variant in case_variants(query) {
        let remaining = match options.limit {
            Some(limit) if results.len() >= limit => break,
            Some(limit) => Some(limit - results.len()),
            None => None,
        };
        let per_variant = SearchOptions {
            limit: remaining,
            ..*options
        };
        results.extend(index.search_with(&variant, &per_variant));
    }

    results
}
