// ttsclean-core/src/filters/emotes.rs
//! Emote-token stripping.
//! License: MIT OR Apache-2.0

use crate::config::EmoteSet;

/// Removes every whitespace-delimited token that exact-matches an emote name.
///
/// Matching is case-sensitive (platform emote names are). Remaining tokens
/// are rejoined with single spaces, which collapses any redundant
/// whitespace; their order is preserved. A message consisting entirely of
/// emotes strips to the empty string. An empty emote set degrades to a
/// no-op and returns the message unchanged.
pub fn strip_emotes(message: &str, emotes: &EmoteSet) -> String {
    if emotes.is_empty() {
        return message.to_string();
    }
    message
        .split_whitespace()
        .filter(|token| !emotes.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emotes_of(names: &[&str]) -> EmoteSet {
        names.iter().copied().collect()
    }

    #[test]
    fn emote_tokens_are_removed_and_whitespace_collapsed() {
        let emotes = emotes_of(&["LUL"]);
        assert_eq!(strip_emotes("LUL great play LUL", &emotes), "great play");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let emotes = emotes_of(&["LUL"]);
        assert_eq!(strip_emotes("lul great play", &emotes), "lul great play");
    }

    #[test]
    fn all_emote_message_strips_to_empty() {
        let emotes = emotes_of(&["LUL", "Kappa"]);
        assert_eq!(strip_emotes("LUL Kappa LUL", &emotes), "");
    }

    #[test]
    fn empty_emote_set_is_a_noop() {
        let emotes = EmoteSet::new();
        assert_eq!(strip_emotes("spaced   out   text", &emotes), "spaced   out   text");
    }

    #[test]
    fn token_order_is_preserved() {
        let emotes = emotes_of(&["Kappa"]);
        assert_eq!(strip_emotes("one Kappa two Kappa three", &emotes), "one two three");
    }

    #[test]
    fn partial_token_matches_are_not_stripped() {
        let emotes = emotes_of(&["LUL"]);
        assert_eq!(strip_emotes("LULW is different", &emotes), "LULW is different");
    }
}
