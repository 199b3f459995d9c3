// ttsclean-core/src/filters/mentions.rs
//! `@username` mention replacement.
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::resolver::NameResolver;

lazy_static! {
    /// A mention is `@` followed by one or more identifier characters.
    static ref MENTION_PATTERN: Regex = Regex::new(r"@([A-Za-z0-9_]+)").unwrap();
}

/// Replaces each `@username` mention with the resolver's display name.
///
/// Mentions are resolved independently, left to right. When the resolver
/// returns `None` the original token is left in place; an unresolved
/// mention is a no-op, not an error. All non-matched text is preserved
/// verbatim, so adjacent token boundaries are never disturbed.
pub fn replace_mentions(message: &str, resolver: &dyn NameResolver) -> String {
    MENTION_PATTERN
        .replace_all(message, |caps: &Captures| {
            match resolver.resolve(&caps[1]) {
                Some(display_name) => display_name,
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
