//! Boundary detection over raw corpus bytes.
//!
//! The corpus is never validated as UTF-8, so every helper here works on
//! `&[u8]` and treats malformed sequences as single-byte, non-decodable
//! units rather than failing.

/// Decode the scalar value starting at byte `i`.
///
/// Returns the char (or `None` for an invalid/truncated sequence) and its
/// width in bytes. Invalid bytes always have width 1 so callers make progress.
pub fn decode_forward(bytes: &[u8], i: usize) -> (Option<char>, usize) {
    let Some(&first) = bytes.get(i) else {
        return (None, 0);
    };

    let width = utf8_width(first);
    if width == 0 || i + width > bytes.len() {
        return (None, 1);
    }

    match std::str::from_utf8(&bytes[i..i + width]) {
        Ok(s) => (s.chars().next(), width),
        Err(_) => (None, 1),
    }
}

/// Decode the scalar value that ends just before byte `i`.
///
/// Walks back over at most three continuation bytes to find the lead byte,
/// so a scan never lands in the middle of a multi-byte character.
pub fn decode_backward(bytes: &[u8], i: usize) -> (Option<char>, usize) {
    if i == 0 || i > bytes.len() {
        return (None, 0);
    }

    let lowest = i.saturating_sub(4);
    let mut start = i - 1;
    while start > lowest && is_continuation(bytes[start]) {
        start -= 1;
    }

    match decode_forward(bytes, start) {
        (Some(c), width) if start + width == i => (Some(c), width),
        _ => (None, 1),
    }
}

/// Largest char boundary `<= i`.
///
/// Only moves when `i` falls inside a well-formed multi-byte character.
/// Stray continuation bytes are left in place, like [`ceil_char_boundary`].
pub fn floor_char_boundary(bytes: &[u8], i: usize) -> usize {
    if i >= bytes.len() {
        return bytes.len();
    }
    match enclosing_char(bytes, i) {
        Some((start, _)) => start,
        None => i,
    }
}

/// Smallest char boundary `>= i`.
pub fn ceil_char_boundary(bytes: &[u8], i: usize) -> usize {
    if i >= bytes.len() {
        return bytes.len();
    }
    match enclosing_char(bytes, i) {
        Some((_, end)) => end,
        None => i,
    }
}

/// Span of the valid character that byte `i` is strictly inside of
fn enclosing_char(bytes: &[u8], i: usize) -> Option<(usize, usize)> {
    if !is_continuation(bytes[i]) {
        return None;
    }
    let lowest = i.saturating_sub(3);
    let mut start = i;
    while start > lowest && is_continuation(bytes[start]) {
        start -= 1;
    }
    match decode_forward(bytes, start) {
        (Some(_), width) if start + width > i => Some((start, start + width)),
        _ => None,
    }
}

/// Characters that end a word: whitespace and punctuation.
#[inline]
pub fn is_boundary(c: char) -> bool {
    c.is_whitespace() || is_punctuation(c)
}

/// Letters and numbers; everything else is trimmed from result edges.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric()
}

/// Unicode punctuation (general category P*).
///
/// ASCII symbols such as `$`, `+`, `<`, `^` and `|` are category S, not P,
/// and are deliberately excluded.
pub fn is_punctuation(c: char) -> bool {
    match c {
        '!' | '"' | '#' | '%' | '&' | '\'' | '(' | ')' | '*' | ',' | '-' | '.' | '/' | ':'
        | ';' | '?' | '@' | '[' | '\\' | ']' | '_' | '{' | '}' => true,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}'
        | '\u{00BF}' | '\u{037E}' | '\u{0387}' => true,
        // General Punctuation, minus the spaces/format controls and the
        // few math operators that live in the block.
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{2043}' | '\u{2045}'..='\u{2051}'
        | '\u{2053}'..='\u{205E}' => true,
        '\u{2E00}'..='\u{2E4F}' => true,
        // CJK symbols and punctuation
        '\u{3001}'..='\u{3003}' | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301F}' => true,
        '\u{FE10}'..='\u{FE19}' | '\u{FE30}'..='\u{FE52}' | '\u{FE54}'..='\u{FE61}' => true,
        '\u{FF01}'..='\u{FF03}' | '\u{FF05}'..='\u{FF0A}' | '\u{FF0C}'..='\u{FF0F}'
        | '\u{FF1A}' | '\u{FF1B}' | '\u{FF1F}' | '\u{FF20}' | '\u{FF3B}'..='\u{FF3D}'
        | '\u{FF3F}' | '\u{FF5B}' | '\u{FF5D}' => true,
        _ => false,
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Expected sequence width from a lead byte, 0 if it cannot start one.
#[inline]
fn utf8_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_forward_multibyte() {
        let text = "aé€😀".as_bytes();
        assert_eq!(decode_forward(text, 0), (Some('a'), 1));
        assert_eq!(decode_forward(text, 1), (Some('é'), 2));
        assert_eq!(decode_forward(text, 3), (Some('€'), 3));
        assert_eq!(decode_forward(text, 6), (Some('😀'), 4));
        assert_eq!(decode_forward(text, 10), (None, 0));
    }

    #[test]
    fn test_decode_forward_invalid() {
        // Lone continuation byte and truncated sequence
        assert_eq!(decode_forward(b"\x80abc", 0), (None, 1));
        assert_eq!(decode_forward(b"\xE2\x82", 0), (None, 1));
    }

    #[test]
    fn test_decode_backward_multibyte() {
        let text = "aé€😀".as_bytes();
        assert_eq!(decode_backward(text, 10), (Some('😀'), 4));
        assert_eq!(decode_backward(text, 6), (Some('€'), 3));
        assert_eq!(decode_backward(text, 3), (Some('é'), 2));
        assert_eq!(decode_backward(text, 1), (Some('a'), 1));
        assert_eq!(decode_backward(text, 0), (None, 0));
    }

    #[test]
    fn test_decode_backward_mid_char() {
        // Byte 2 is inside 'é'; what precedes it is an incomplete sequence.
        let text = "aé".as_bytes();
        assert_eq!(decode_backward(text, 2), (None, 1));
    }

    #[test]
    fn test_char_boundaries() {
        let text = "a€b".as_bytes(); // '€' occupies bytes 1..4
        assert_eq!(floor_char_boundary(text, 2), 1);
        assert_eq!(floor_char_boundary(text, 3), 1);
        assert_eq!(ceil_char_boundary(text, 2), 4);
        assert_eq!(ceil_char_boundary(text, 4), 4);
        assert_eq!(floor_char_boundary(text, 100), text.len());
    }

    #[test]
    fn test_char_boundaries_keep_stray_bytes() {
        // Continuation bytes with no lead byte are not part of any char
        let text = b"\x80\x80\x80 ab \xBF";
        assert_eq!(ceil_char_boundary(text, 0), 0);
        assert_eq!(ceil_char_boundary(text, 1), 1);
        assert_eq!(floor_char_boundary(text, 2), 2);
        assert_eq!(floor_char_boundary(text, 7), 7);

        // A lead byte whose sequence is cut short does not own what follows
        let text = b"\xE2\x82 x";
        assert_eq!(ceil_char_boundary(text, 1), 1);
        assert_eq!(floor_char_boundary(text, 1), 1);
    }

    #[test]
    fn test_boundary_chars() {
        assert!(is_boundary(' '));
        assert!(is_boundary('\n'));
        assert!(is_boundary(','));
        assert!(is_boundary('\u{2014}')); // em dash
        assert!(is_boundary('\u{201C}')); // left double quote
        assert!(is_boundary('\u{3002}')); // ideographic full stop
        assert!(!is_boundary('a'));
        assert!(!is_boundary('é'));
        assert!(!is_boundary('$'));
        assert!(!is_boundary('+'));
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Ж'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('$'));
    }
}
