// ttsclean/src/logger.rs
//! Logger initialization for the ttsclean CLI.
//!
//! License: MIT OR Apache-2.0

use log::LevelFilter;

/// Initializes the global `env_logger` instance.
///
/// An explicit `level` overrides whatever `RUST_LOG` requests; `None` keeps
/// the environment configuration. Only the first call in a process takes
/// effect; later calls (tests sharing a process, for instance) are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.format_timestamp(None);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
