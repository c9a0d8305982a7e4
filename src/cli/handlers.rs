//! CLI command handlers.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::{Path, PathBuf};

use crate::cli::output::{LinkListing, NoteListing, OutputFormat};
use crate::cli::{Cli, CompletionsArgs, LinksArgs, ListArgs, ShowArgs};
use crate::domain::NoteCollection;
use crate::loader::{load_notes, read_note};

pub fn handle_list(args: &ListArgs, notes_dir: &Path, verbose: bool) -> Result<()> {
    let collection = load(notes_dir, verbose)?;

    let mut listings: Vec<NoteListing> = collection
        .iter()
        .map(|(path, note)| NoteListing {
            title: note.title().to_string(),
            path: path.display().to_string(),
            links: note.links().len(),
        })
        .collect();
    listings.sort_by(|a, b| a.title.cmp(&b.title).then(a.path.cmp(&b.path)));

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                println!("{}  [{} links]  {}", listing.title, listing.links, listing.path);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
        OutputFormat::Paths => {
            for listing in &listings {
                println!("{}", listing.path);
            }
        }
    }

    Ok(())
}

pub fn handle_links(args: &LinksArgs, notes_dir: &Path, verbose: bool) -> Result<()> {
    let mut listings: Vec<LinkListing> = Vec::new();

    if let Some(file) = &args.file {
        let path = resolve_path(file, notes_dir);
        let note = read_note(&path)
            .with_context(|| format!("failed to read note {}", path.display()))?;
        collect_links(&mut listings, &path, note.links());
    } else {
        let collection = load(notes_dir, verbose)?;
        let mut paths: Vec<_> = collection.keys().cloned().collect();
        paths.sort();
        for path in paths {
            collect_links(&mut listings, &path, collection[&path].links());
        }
    }

    match args.format {
        OutputFormat::Human => {
            for listing in &listings {
                println!("{}: {}", listing.source, listing.target);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listings)?),
        OutputFormat::Paths => {
            for listing in &listings {
                println!("{}", listing.target);
            }
        }
    }

    Ok(())
}

pub fn handle_show(args: &ShowArgs, notes_dir: &Path) -> Result<()> {
    let path = resolve_path(&args.file, notes_dir);
    let note = read_note(&path)
        .with_context(|| format!("failed to read note {}", path.display()))?;

    println!("{}", note.title());
    println!();
    print!("{}", note.raw_contents());

    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

fn load(notes_dir: &Path, verbose: bool) -> Result<NoteCollection> {
    let collection = load_notes(notes_dir)
        .with_context(|| format!("failed to load notes from {}", notes_dir.display()))?;
    if verbose {
        eprintln!("loaded {} notes from {}", collection.len(), notes_dir.display());
    }
    Ok(collection)
}

fn resolve_path(file: &Path, notes_dir: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        notes_dir.join(file)
    }
}

fn collect_links(
    listings: &mut Vec<LinkListing>,
    source: &Path,
    links: &[crate::domain::LinkEntry],
) {
    for link in links {
        listings.push(LinkListing {
            source: source.display().to_string(),
            kind: link.kind(),
            target: link.target().to_string(),
            text: link.text().to_string(),
        });
    }
}
