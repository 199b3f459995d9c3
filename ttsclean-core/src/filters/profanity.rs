// ttsclean-core/src/filters/profanity.rs
//! Profanity detection against a compiled lexicon.
//! License: MIT OR Apache-2.0

use log::debug;

use crate::lexicon::Lexicon;

/// Returns true if any token of `message` is a lexicon word.
///
/// Tokens are maximal runs of alphanumeric characters: whitespace and
/// punctuation both delimit. Matching is whole-token and case-insensitive,
/// so a clean word that merely contains a banned substring does not trip
/// ("classic" stays clean even while "ass" is banned). Empty and
/// whitespace-only input never trips.
pub fn contains_bad_word(message: &str, lexicon: &Lexicon) -> bool {
    let tripped = message
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| lexicon.contains_word(token));
    if tripped {
        debug!("Message rejected: profanity lexicon match.");
    }
    tripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconConfig;

    fn lexicon_of(words: &[&str]) -> Lexicon {
        Lexicon::compile(&LexiconConfig {
            version: "test".to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        })
        .unwrap()
    }

    #[test]
    fn whole_tokens_match_case_insensitively() {
        let lexicon = lexicon_of(&["frick"]);
        assert!(contains_bad_word("what the frick", &lexicon));
        assert!(contains_bad_word("what the FRICK", &lexicon));
        assert!(contains_bad_word("Frick!", &lexicon));
    }

    #[test]
    fn punctuation_delimits_tokens() {
        let lexicon = lexicon_of(&["frick"]);
        assert!(contains_bad_word("frick,that", &lexicon));
        assert!(contains_bad_word("(frick)", &lexicon));
        assert!(contains_bad_word("...frick...", &lexicon));
    }

    #[test]
    fn substrings_do_not_trip() {
        let lexicon = lexicon_of(&["ass"]);
        assert!(!contains_bad_word("a classic assessment", &lexicon));
        assert!(contains_bad_word("a classic ass assessment", &lexicon));
    }

    #[test]
    fn empty_and_whitespace_input_never_trips() {
        let lexicon = lexicon_of(&["frick"]);
        assert!(!contains_bad_word("", &lexicon));
        assert!(!contains_bad_word("   \t  ", &lexicon));
    }

    #[test]
    fn clean_message_passes() {
        let lexicon = lexicon_of(&["frick", "heck"]);
        assert!(!contains_bad_word("great play everyone", &lexicon));
    }
}
