//! Character counting for HTML bodies.
//!
//! Body limits apply to the rendered text, not the markup, so tags are
//! stripped and entities decoded before counting. Whitespace is
//! normalized: runs collapse to a single space and the ends are
//! trimmed, matching how the editor reports the count.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Count the text characters of an HTML fragment.
pub fn char_count(html: &str) -> usize {
    let stripped = TAG_RE.replace_all(html, " ");
    let decoded = decode_entities(&stripped);
    let mut count = 0;
    let mut first = true;
    for word in decoded.split_whitespace() {
        if !first {
            count += 1; // separating space
        }
        count += word.chars().count();
        first = false;
    }
    count
}

/// Decode the handful of entities the editor actually emits.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_text_not_markup() {
        assert_eq!(char_count("<p>hello</p>"), 5);
        assert_eq!(char_count("<p>hello</p><p>world</p>"), 11);
    }

    #[test]
    fn empty_paragraph_counts_zero() {
        assert_eq!(char_count("<p></p>"), 0);
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn entities_decode_to_single_characters() {
        assert_eq!(char_count("<p>a&amp;b</p>"), 3);
        assert_eq!(char_count("<p>a&nbsp;b</p>"), 3);
        assert_eq!(char_count("<p>&quot;ok&quot;</p>"), 4);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(char_count("<p>a   b</p>\n<p> c </p>"), 5);
    }

    #[test]
    fn counts_unicode_scalars() {
        assert_eq!(char_count("<p>caffè</p>"), 5);
    }
}
