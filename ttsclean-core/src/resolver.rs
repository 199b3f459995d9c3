// ttsclean-core/src/resolver.rs
//! Defines the `NameResolver` trait, the seam between the cleaning pipeline
//! and the host's display-name lookup.
//!
//! The core never implements name lookup itself; it treats the resolver as
//! an opaque, possibly-absent, synchronous collaborator. The trait decouples
//! the pipeline from whatever metadata store the host keeps its TTS names
//! in, allowing different lookup strategies to be used interchangeably.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

/// A synchronous display-name lookup supplied by the host environment.
///
/// `resolve` receives the username captured from an `@username` mention and
/// returns the display name to speak in its place, or `None` when the user
/// is unknown. Unresolved mentions are a no-op for the pipeline, never an
/// error.
pub trait NameResolver {
    fn resolve(&self, key: &str) -> Option<String>;
}

/// Any `Fn(&str) -> Option<String>` closure is a resolver.
impl<F> NameResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// A resolver backed by a pre-materialized username -> display-name table.
///
/// Chat usernames are case-insensitive on the platforms this feeds, so keys
/// are normalized to lowercase on insert and on lookup.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    names: HashMap<String, String>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the display name for a username.
    pub fn insert(&mut self, username: impl Into<String>, display_name: impl Into<String>) {
        self.names
            .insert(username.into().to_lowercase(), display_name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for MapResolver {
    fn resolve(&self, key: &str) -> Option<String> {
        self.names.get(&key.to_lowercase()).cloned()
    }
}

impl FromIterator<(String, String)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for (username, display_name) in iter {
            resolver.insert(username, display_name);
        }
        resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_resolver_is_case_insensitive() {
        let mut resolver = MapResolver::new();
        resolver.insert("Alice", "Alice W.");
        assert_eq!(resolver.resolve("alice"), Some("Alice W.".to_string()));
        assert_eq!(resolver.resolve("ALICE"), Some("Alice W.".to_string()));
        assert_eq!(resolver.resolve("bob"), None);
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |key: &str| {
            if key == "bob" {
                Some("Bobby".to_string())
            } else {
                None
            }
        };
        assert_eq!(resolver.resolve("bob"), Some("Bobby".to_string()));
        assert_eq!(resolver.resolve("eve"), None);
    }
}
