//! CLI command definitions and handlers

pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - load a directory of markdown notes into titles and links
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (defaults to the current directory)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes with their resolved titles
    #[command(name = "ls")]
    List(ListArgs),

    /// List outgoing links, for one note or the whole directory
    Links(LinksArgs),

    /// Show a note's resolved title and raw contents
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct LinksArgs {
    /// Note file to list links from (relative paths resolve against the
    /// notes directory); omit to list links from every note
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Note file to show
    pub file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
