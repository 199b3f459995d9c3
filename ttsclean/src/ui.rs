// ttsclean/src/ui.rs
//! Colorized terminal output helpers for the ttsclean CLI.
//!
//! Color is applied only when the target stream is attached to a terminal,
//! so piped output stays machine-readable.
//!
//! License: MIT OR Apache-2.0

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

use ttsclean_core::ClassificationResult;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().cyan());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().yellow());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().red());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Prints the check verdict to stdout, colorized on terminals.
pub fn print_verdict(result: &ClassificationResult) {
    let supports_color = io::stdout().is_terminal();
    if result.was_clean {
        if supports_color {
            println!("{}", "clean".green());
        } else {
            println!("clean");
        }
    } else {
        let line = format!("rejected: {}", result.tripped_filter);
        if supports_color {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}
