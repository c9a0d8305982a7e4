//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain file paths, one per line
    Paths,
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub title: String,
    pub path: String,
    pub links: usize,
}

/// A single outgoing link in listing output.
#[derive(Debug, Serialize)]
pub struct LinkListing {
    pub source: String,
    pub kind: crate::domain::LinkKind,
    pub target: String,
    pub text: String,
}
