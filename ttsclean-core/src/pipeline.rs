// ttsclean-core/src/pipeline.rs
//! The cleaning pipeline: checkers first, then transformers.
//!
//! `CleaningPipeline` is the orchestrator over the leaf filters. A run is a
//! deterministic, side-effect-free single pass: the enabled checkers are
//! evaluated in fixed order with a short-circuit on the first trip, and only
//! a message that passes both reaches the transformers. Transformer order is
//! also fixed (mentions, then emotes, then URLs) because emote and URL
//! stripping operate on whitespace-tokenized text and must not see the raw
//! `@username` tokens that mention substitution rewrites.
//!
//! License: MIT OR Apache-2.0

use log::{debug, warn};

use crate::config::FilterConfig;
use crate::filters::{
    contains_bad_word, contains_non_ascii, replace_mentions, strip_emotes, strip_urls,
};
use crate::lexicon::Lexicon;
use crate::outcome::{ClassificationResult, TrippedFilter};
use crate::resolver::NameResolver;

/// Applies a `FilterConfig` to messages, one independent pure pass each.
///
/// The pipeline borrows its lexicon (typically the shared
/// [`Lexicon::default_lexicon`]) and holds no cross-call state, so a single
/// pipeline can classify any number of messages, concurrently if desired.
pub struct CleaningPipeline<'a> {
    config: FilterConfig,
    lexicon: &'a Lexicon,
    resolver: Option<&'a dyn NameResolver>,
}

impl<'a> CleaningPipeline<'a> {
    /// Creates a pipeline with no resolver attached.
    ///
    /// With `replace_usernames` enabled and no resolver, mention replacement
    /// degrades to leaving every mention unresolved; it never fails.
    pub fn new(config: FilterConfig, lexicon: &'a Lexicon) -> Self {
        Self {
            config,
            lexicon,
            resolver: None,
        }
    }

    /// Attaches the host's name resolver.
    pub fn with_resolver(mut self, resolver: &'a dyn NameResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// The configuration this pipeline applies.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Classifies one message and, if clean, produces its cleaned form.
    ///
    /// Evaluation order: ASCII check, profanity check, then the enabled
    /// transformers (mentions, emotes, URLs). The first tripped checker
    /// rejects the message outright with an empty `cleaned_message`.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        if self.config.filter_non_ascii && contains_non_ascii(message) {
            debug!("Message rejected: non-ASCII content.");
            return ClassificationResult::rejected(TrippedFilter::Ascii);
        }
        if self.config.filter_bad_words && contains_bad_word(message, self.lexicon) {
            return ClassificationResult::rejected(TrippedFilter::BadWord);
        }

        let mut cleaned = message.to_string();
        if self.config.replace_usernames {
            match self.resolver {
                Some(resolver) => cleaned = replace_mentions(&cleaned, resolver),
                None => {
                    warn!("replace_usernames is enabled but no resolver is attached; mentions left unresolved.");
                }
            }
        }
        if self.config.strip_emotes {
            cleaned = strip_emotes(&cleaned, &self.config.emotes);
        }
        if self.config.strip_urls {
            cleaned = strip_urls(&cleaned);
        }

        debug!(
            "Message clean. Original length: {}, cleaned length: {}.",
            message.len(),
            cleaned.len()
        );
        ClassificationResult::clean(cleaned)
    }
}

/// One-shot classification for hosts that don't keep a pipeline around.
///
/// This is the primary entry point for non-interactive embedding: it builds
/// a pipeline, attaches the resolver when one is supplied, and classifies a
/// single message.
pub fn clean_message(
    config: FilterConfig,
    lexicon: &Lexicon,
    resolver: Option<&dyn NameResolver>,
    message: &str,
) -> ClassificationResult {
    let mut pipeline = CleaningPipeline::new(config, lexicon);
    if let Some(resolver) = resolver {
        pipeline = pipeline.with_resolver(resolver);
    }
    pipeline.classify(message)
}
