// ttsclean/src/lib.rs
//! # ttsclean CLI Application
//!
//! This crate provides the command-line front-end for the `ttsclean-core`
//! cleaning engine. It owns everything the core deliberately does not:
//! argument parsing, default-filling of the filter configuration, resolver
//! and emote-list construction, logging initialization, and output
//! rendering.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod names;
pub mod ui;
