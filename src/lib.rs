//! sett - load a directory of markdown notes into titles, links, and parse trees

pub mod cli;
pub mod domain;
pub mod loader;
pub mod markdown;
pub mod title;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cli::{
    Cli, Command,
    handlers::{handle_completions, handle_links, handle_list, handle_show},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let notes_dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::List(args) => handle_list(args, &notes_dir, verbose),
        Command::Links(args) => handle_links(args, &notes_dir, verbose),
        Command::Show(args) => handle_show(args, &notes_dir),
        Command::Completions(args) => handle_completions(args),
    }
}
