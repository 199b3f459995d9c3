// ttsclean/src/main.rs
//! ttsclean entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! implementations.

use anyhow::Result;
use clap::Parser;

use ttsclean::cli::{Cli, Commands};
use ttsclean::commands;
use ttsclean::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else {
        logger::init_logger(None);
    }

    match &args.command {
        Commands::Clean(cmd) => commands::clean::run(cmd, args.quiet),
        Commands::Check(cmd) => {
            let was_clean = commands::check::run(cmd, args.quiet)?;
            if !was_clean {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
