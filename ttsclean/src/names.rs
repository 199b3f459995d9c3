// ttsclean/src/names.rs
//! Name-table loading for mention resolution.
//!
//! The core treats display-name lookup as an opaque collaborator; this
//! module is the CLI's implementation of it. A names file maps usernames to
//! metadata maps, and the `--tts-name-key` field selects which metadata
//! entry supplies the spoken display name, matching the per-user metadata
//! shape chat hosts keep their TTS names in.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

use ttsclean_core::MapResolver;

use crate::cli::FilterArgs;

/// The on-disk names document: username -> metadata-key -> value.
type NamesFile = HashMap<String, HashMap<String, String>>;

/// Loads a names file and projects it through `tts_name_key` into a resolver.
///
/// Users without the requested metadata field are skipped with a warning;
/// mentions of them will stay unresolved, which the pipeline treats as a
/// no-op.
pub fn load_names_file(path: &Path, tts_name_key: &str) -> Result<MapResolver> {
    info!("Loading display names from: {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read names file {}", path.display()))?;
    let table: NamesFile = serde_yml::from_str(&text)
        .with_context(|| format!("Failed to parse names file {}", path.display()))?;

    let mut resolver = MapResolver::new();
    for (username, metadata) in &table {
        match metadata.get(tts_name_key) {
            Some(display_name) => resolver.insert(username.clone(), display_name.clone()),
            None => warn!(
                "User '{}' has no '{}' metadata field; mentions of them will stay unresolved.",
                username, tts_name_key
            ),
        }
    }
    info!(
        "Loaded {} display name(s) from {} user entries.",
        resolver.len(),
        table.len()
    );
    Ok(resolver)
}

/// Parses a `USER=DISPLAY` literal from `--name`.
fn parse_name_override(value: &str) -> Result<(String, String)> {
    match value.split_once('=') {
        Some((user, display)) if !user.is_empty() && !display.is_empty() => {
            Ok((user.to_string(), display.to_string()))
        }
        _ => bail!("Invalid --name value '{}': expected USER=DISPLAY.", value),
    }
}

/// Builds the mention resolver from `--names-file` plus `--name` overrides.
///
/// Returns `None` when neither source was given; the pipeline then leaves
/// every mention unresolved.
pub fn build_resolver(args: &FilterArgs) -> Result<Option<MapResolver>> {
    if args.names_file.is_none() && args.name.is_empty() {
        return Ok(None);
    }

    let mut resolver = match &args.names_file {
        Some(path) => load_names_file(path, &args.tts_name_key)?,
        None => MapResolver::new(),
    };
    for value in &args.name {
        let (user, display) = parse_name_override(value)?;
        resolver.insert(user, display);
    }
    debug!("Resolver ready with {} display name(s).", resolver.len());
    Ok(Some(resolver))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_override_parses_user_and_display() {
        let (user, display) = parse_name_override("bob=Bobby Tables").unwrap();
        assert_eq!(user, "bob");
        assert_eq!(display, "Bobby Tables");
    }

    #[test]
    fn name_override_rejects_malformed_specs() {
        assert!(parse_name_override("bob").is_err());
        assert!(parse_name_override("=Bobby").is_err());
        assert!(parse_name_override("bob=").is_err());
    }
}
