// ttsclean-core/src/outcome.rs
//! Provides the core data structures for reporting classification outcomes
//! within the `ttsclean-core` library.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the first filter, in evaluation order, that rejected a message.
///
/// This is a closed set: hosts receive one of exactly three values and can
/// never observe an out-of-band string. The serialized form matches the
/// host-facing output contract (`""`, `"ASCII"`, `"BAD_WORD"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrippedFilter {
    /// The message passed every enabled checker.
    #[default]
    #[serde(rename = "")]
    None,
    /// The message contained at least one character outside the ASCII range.
    #[serde(rename = "ASCII")]
    Ascii,
    /// The message contained at least one token from the profanity lexicon.
    #[serde(rename = "BAD_WORD")]
    BadWord,
}

impl TrippedFilter {
    /// Returns the host-facing string form of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrippedFilter::None => "",
            TrippedFilter::Ascii => "ASCII",
            TrippedFilter::BadWord => "BAD_WORD",
        }
    }
}

impl fmt::Display for TrippedFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete outcome of classifying a single message.
///
/// Invariants, upheld by the constructors:
/// * `was_clean == (tripped_filter == TrippedFilter::None)`
/// * `cleaned_message` is non-empty only when `was_clean` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// True if the message did not trip any enabled filter.
    pub was_clean: bool,
    /// The filter that rejected the message, or `TrippedFilter::None`.
    pub tripped_filter: TrippedFilter,
    /// The cleaned message, or an empty string when the message was rejected.
    pub cleaned_message: String,
}

impl ClassificationResult {
    /// Builds the outcome for a message that passed every enabled checker.
    pub fn clean(cleaned_message: String) -> Self {
        Self {
            was_clean: true,
            tripped_filter: TrippedFilter::None,
            cleaned_message,
        }
    }

    /// Builds the outcome for a rejected message.
    ///
    /// `filter` must name the checker that tripped; passing
    /// `TrippedFilter::None` here would violate the struct invariant.
    pub fn rejected(filter: TrippedFilter) -> Self {
        debug_assert!(filter != TrippedFilter::None);
        Self {
            was_clean: false,
            tripped_filter: filter,
            cleaned_message: String::new(),
        }
    }
}
