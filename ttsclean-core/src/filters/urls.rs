// ttsclean-core/src/filters/urls.rs
//! URL-substring stripping.
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::Regex;

use super::collapse_whitespace;

lazy_static! {
    /// Scheme-prefixed URLs plus bare `www.` hosts. The scheme/prefix is
    /// matched case-insensitively; the rest of the URL runs to the next
    /// whitespace.
    static ref URL_PATTERN: Regex = Regex::new(r"(?i)\b(?:https?://|www\.)\S+").unwrap();
}

/// Removes every recognized URL substring and collapses the whitespace left
/// behind. Surrounding text keeps its order.
pub fn strip_urls(message: &str) -> String {
    if !URL_PATTERN.is_match(message) {
        return message.to_string();
    }
    let stripped = URL_PATTERN.replace_all(message, "");
    collapse_whitespace(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_urls_are_removed_with_whitespace_collapsed() {
        assert_eq!(strip_urls("check https://example.com now"), "check now");
        assert_eq!(strip_urls("see http://example.com/path?q=1 there"), "see there");
    }

    #[test]
    fn bare_www_hosts_are_removed() {
        assert_eq!(strip_urls("go to www.example.com today"), "go to today");
    }

    #[test]
    fn scheme_matching_is_case_insensitive() {
        assert_eq!(strip_urls("HTTPS://EXAMPLE.COM gone"), "gone");
        assert_eq!(strip_urls("WWW.example.com gone"), "gone");
    }

    #[test]
    fn urls_inside_words_are_left_alone() {
        // "awww." has no word boundary before the www run.
        assert_eq!(strip_urls("awww.that is cute"), "awww.that is cute");
    }

    #[test]
    fn message_without_urls_is_unchanged() {
        assert_eq!(strip_urls("no links   here"), "no links   here");
    }

    #[test]
    fn url_only_message_strips_to_empty() {
        assert_eq!(strip_urls("https://example.com"), "");
        assert_eq!(strip_urls("www.a.com www.b.com"), "");
    }
}
