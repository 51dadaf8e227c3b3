//! Case variants of a query
//!
//! Lookups are exact and case-sensitive, so a user query is expanded into
//! its lower-, title- and upper-case spellings before searching.

/// Lower-case, title-case and upper-case spellings of `query`, in that
/// order, without duplicates.
pub fn case_variants(query: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(3);
    for variant in [query.to_lowercase(), title_case(query), query.to_uppercase()] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}

/// Title-case the first letter of every word, leaving the rest untouched.
///
/// A word starts after a separator: ASCII characters other than letters,
/// digits and `_`, or any whitespace.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if prev.is_none_or(is_separator) {
            out.push(to_title(c));
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Single-char title-case mapping.
///
/// Differs from `to_uppercase` for the Latin digraphs and the Greek letters
/// with ypogegrammeni, which have a distinct title form. Characters whose
/// upper case is more than one char (like `ß`) are left as they are.
fn to_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        }
    }
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("romeo and juliet"), "Romeo And Juliet");
        assert_eq!(title_case("o'er"), "O'Er");
        assert_eq!(title_case("élan vital"), "Élan Vital");
        assert_eq!(title_case("snake_case"), "Snake_case");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_uses_title_forms() {
        assert_eq!(title_case("ǆemal"), "ǅemal");
        assert_eq!(title_case("Ǉubljana"), "ǈubljana");
        assert_eq!(title_case("ᾳ"), "ᾼ");
        // No single-char upper case: left alone
        assert_eq!(title_case("ßa"), "ßa");
        assert_eq!(title_case("ﬁne"), "ﬁne");
    }

    #[test]
    fn test_variants_order() {
        assert_eq!(case_variants("hAmLeT"), vec!["hamlet", "HAmLeT", "HAMLET"]);
    }

    #[test]
    fn test_variants_deduplicated() {
        assert_eq!(case_variants("1601"), vec!["1601"]);
        assert_eq!(case_variants("A"), vec!["a", "A"]);
    }

    #[test]
    fn test_variants_multibyte() {
        assert_eq!(case_variants("straße"), vec!["straße", "Straße", "STRASSE"]);
    }
}
