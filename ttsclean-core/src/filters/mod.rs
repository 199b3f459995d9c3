// ttsclean-core/src/filters/mod.rs
//! The leaf checkers and transformers applied by the cleaning pipeline.
//!
//! Checkers (`ascii`, `profanity`) classify a message without modifying it;
//! transformers (`mentions`, `emotes`, `urls`) produce a new string. Every
//! function here is pure and total over arbitrary string input.
//!
//! License: MIT OR Apache-2.0

pub mod ascii;
pub mod emotes;
pub mod mentions;
pub mod profanity;
pub mod urls;

pub use ascii::contains_non_ascii;
pub use emotes::strip_emotes;
pub use mentions::replace_mentions;
pub use profanity::contains_bad_word;
pub use urls::strip_urls;

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
