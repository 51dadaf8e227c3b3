#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shakesearch::{Index, SearchOptions};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    corpus: &'a [u8],
    query: &'a str,
    radius: u8,
}

fuzz_target!(|input: Input| {
    // Index arbitrary bytes and search them; every occurrence must be reported
    let Ok(index) = Index::from_bytes(input.corpus) else {
        return;
    };

    let offsets = index.offsets(input.query);
    assert_eq!(offsets.len(), index.count(input.query));
    for &pos in &offsets {
        assert!(input.corpus[pos..].starts_with(input.query.as_bytes()));
    }

    let _ = index.search(input.query);
    let _ = index.search_with(input.query, &SearchOptions::context(input.radius as usize));
});
