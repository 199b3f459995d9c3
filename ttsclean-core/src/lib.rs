// ttsclean-core/src/lib.rs
//! # ttsclean Core Library
//!
//! `ttsclean-core` provides the fundamental, platform-independent logic for
//! cleaning chat messages before they are handed to a text-to-speech voice.
//! It classifies a message against a set of configurable filters and, when
//! the message is clean, produces a sanitized form of it.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! classification and transformation of input strings, without concerns for
//! I/O or application-specific state management. Host plumbing (plugin
//! registration, configuration UIs, the metadata store display names come
//! from) lives outside this crate.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` and `EmoteSet` for specifying filter behavior.
//! * `lexicon`: The owned, versioned profanity word list and its compiled form.
//! * `filters`: The leaf checkers and transformers (ASCII, profanity, mentions, emotes, URLs).
//! * `resolver`: The `NameResolver` seam to the host's display-name lookup.
//! * `pipeline`: The orchestrating `CleaningPipeline` and one-shot `clean_message`.
//! * `outcome`: `ClassificationResult` and the closed `TrippedFilter` set.
//! * `errors`: Structured error types for the loading and validation paths.
//!
//! ## Usage Example
//!
//! ```rust
//! use ttsclean_core::{CleaningPipeline, EmoteSet, FilterConfig, Lexicon, MapResolver};
//!
//! fn main() {
//!     // 1. Build an explicit filter configuration (the core never fills
//!     //    defaults; that is the calling layer's job).
//!     let config = FilterConfig {
//!         filter_non_ascii: true,
//!         strip_urls: true,
//!         filter_bad_words: true,
//!         replace_usernames: true,
//!         tts_name_key: "ttsName".to_string(),
//!         strip_emotes: true,
//!         emotes: EmoteSet::parse_delimited("LUL,Kappa", ','),
//!     };
//!
//!     // 2. Supply the display names the host resolved for this channel.
//!     let mut resolver = MapResolver::new();
//!     resolver.insert("bob", "Bobby");
//!
//!     // 3. Classify a message against the shared default lexicon.
//!     let pipeline = CleaningPipeline::new(config, Lexicon::default_lexicon())
//!         .with_resolver(&resolver);
//!     let result = pipeline.classify("Hello @bob check www.example.com LUL");
//!
//!     assert!(result.was_clean);
//!     assert_eq!(result.cleaned_message, "Hello Bobby check");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Classification is total: every message, including the empty string, maps
//! to a `ClassificationResult`, and rejection is expressed as data
//! (`TrippedFilter`) rather than as an error. Only the loading paths
//! (lexicon and configuration files) are fallible; they use `anyhow::Error`
//! and the structured `TtsCleanError` type.
//!
//! ## Design Principles
//!
//! * **Stateless:** no component holds cross-call state; concurrent
//!   classification of independent messages is trivially safe.
//! * **Total over its input domain:** malformed optional inputs (a missing
//!   resolver, an empty emote list) degrade to no-ops, never to failure.
//! * **Owned data:** the profanity lexicon ships with the crate, versioned,
//!   instead of arriving through an implicit external dependency.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod filters;
pub mod lexicon;
pub mod outcome;
pub mod pipeline;
pub mod resolver;

/// Re-exports the public configuration types for specifying filter behavior.
pub use config::{EmoteSet, FilterConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TtsCleanError;

/// Re-exports the lexicon document and its compiled form.
pub use lexicon::{Lexicon, LexiconConfig};

/// Re-exports the classification outcome types.
pub use outcome::{ClassificationResult, TrippedFilter};

/// Re-exports the pipeline orchestrator and the one-shot entry point.
pub use pipeline::{clean_message, CleaningPipeline};

/// Re-exports the resolver seam and the map-backed implementation.
pub use resolver::{MapResolver, NameResolver};

/// Re-exports the leaf checkers and transformers for hosts that compose
/// their own pass order.
pub use filters::{contains_bad_word, contains_non_ascii, replace_mentions, strip_emotes, strip_urls};
