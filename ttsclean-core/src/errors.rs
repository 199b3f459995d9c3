//! errors.rs - Custom error types for the ttsclean-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Classification itself is total and never produces an error; these types
//! only cover the fallible loading and validation paths.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `ttsclean-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TtsCleanError {
    #[error("Failed to parse lexicon: {0}")]
    LexiconParse(String),

    #[error("Lexicon validation failed:\n{0}")]
    LexiconValidation(String),

    #[error("Failed to parse filter configuration: {0}")]
    ConfigParse(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
