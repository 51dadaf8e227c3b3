//! Turn raw match offsets into readable snippets
//!
//! A match is a byte span `[start, end)` in the corpus. Snippets grow that
//! span outward to word boundaries (or a bounded window), always stepping
//! over whole UTF-8 sequences so no character is split.

use crate::index::types::ExtractMode;
use crate::utils::{
    ceil_char_boundary, decode_backward, decode_forward, floor_char_boundary, is_boundary,
    is_word_char,
};

/// Extract the snippet for a match according to `mode`
pub fn extract(text: &[u8], start: usize, end: usize, mode: ExtractMode) -> String {
    match mode {
        ExtractMode::Word => word_at(text, start, end),
        ExtractMode::Context { radius } => context_at(text, start, end, radius),
    }
}

/// The whole word(s) covering `[start, end)`.
///
/// Leading and trailing characters that are neither letters nor numbers are
/// trimmed, so a match inside `"Hamlet,"` yields `Hamlet`.
pub fn word_at(text: &[u8], start: usize, end: usize) -> String {
    let word_start = scan_back_to_boundary(text, start, 0);
    let word_end = scan_forward_to_boundary(text, end, text.len());

    String::from_utf8_lossy(&text[word_start..word_end])
        .trim_matches(|c: char| !is_word_char(c))
        .to_string()
}

/// Up to `radius` bytes either side of `[start, end)`.
///
/// The window is shrunk to character boundaries, then pulled in to the
/// nearest word boundary at each edge so no word is cut in half (unless the
/// window holds no boundary at all on that side). Runs of whitespace,
/// including line breaks, collapse to a single space.
pub fn context_at(text: &[u8], start: usize, end: usize, radius: usize) -> String {
    let len = text.len();
    let end = end.min(len);
    let start = start.min(end);

    let mut lo = ceil_char_boundary(text, start.saturating_sub(radius)).min(start);
    let mut hi = floor_char_boundary(text, end.saturating_add(radius).min(len)).max(end);

    if lo > 0 && !ends_at_boundary(text, lo) {
        lo = next_word_start(text, lo, start);
    }
    if hi < len && !starts_at_boundary(text, hi) {
        hi = prev_word_end(text, hi, end);
    }

    collapse_whitespace(&String::from_utf8_lossy(&text[lo..hi]))
}

/// Walk backward from `pos` until the previous char is a boundary
fn scan_back_to_boundary(text: &[u8], mut pos: usize, floor: usize) -> usize {
    while pos > floor {
        let (c, width) = decode_backward(text, pos);
        if c.is_some_and(is_boundary) {
            break;
        }
        pos -= width;
    }
    pos
}

/// Walk forward from `pos` until the next char is a boundary
fn scan_forward_to_boundary(text: &[u8], mut pos: usize, ceil: usize) -> usize {
    while pos < ceil {
        let (c, width) = decode_forward(text, pos);
        if c.is_some_and(is_boundary) {
            break;
        }
        pos += width;
    }
    pos
}

fn ends_at_boundary(text: &[u8], pos: usize) -> bool {
    decode_backward(text, pos).0.is_some_and(is_boundary)
}

fn starts_at_boundary(text: &[u8], pos: usize) -> bool {
    decode_forward(text, pos).0.is_some_and(is_boundary)
}

/// First position after a boundary char in `[lo, limit)`, or `lo` if none
fn next_word_start(text: &[u8], lo: usize, limit: usize) -> usize {
    let pos = scan_forward_to_boundary(text, lo, limit);
    if pos < limit {
        let (_, width) = decode_forward(text, pos);
        pos + width
    } else {
        lo
    }
}

/// Last position before a boundary char in `(limit, hi]`, or `hi` if none
fn prev_word_end(text: &[u8], hi: usize, limit: usize) -> usize {
    let pos = scan_back_to_boundary(text, hi, limit);
    if pos > limit {
        let (_, width) = decode_backward(text, pos);
        pos - width
    } else {
        hi
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
