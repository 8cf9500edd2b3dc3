//! `movies` and `shows` command implementation.
//!
//! Runs a single scan in-process and prints the results.

use crate::cli::args::OutputFormat;
use crate::core::MediaLibrary;
use crate::models::config::LibraryConfig;
use crate::models::media::{MediaEntity, MediaKind};
use crate::Result;
use colored::Colorize;

/// Execute a library listing.
pub fn execute_list(
    config: LibraryConfig,
    kind: MediaKind,
    search: &str,
    format: OutputFormat,
) -> Result<()> {
    let library = MediaLibrary::new(config);
    let results = library.list(kind, search)?;

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Simple => print_simple(&results),
        OutputFormat::Table => print_table(&results, kind),
    }

    Ok(())
}

/// Print results as JSON in the same shape the server returns.
fn print_json(results: &[MediaEntity]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Print one line per entity.
fn print_simple(results: &[MediaEntity]) {
    for entity in results {
        match &entity.episodes {
            Some(episodes) => println!("{} - {} episodes", entity.name, episodes.len()),
            None => println!("{}", entity.name),
        }
    }
}

/// Print results as table.
fn print_table(results: &[MediaEntity], kind: MediaKind) {
    if results.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Found {} {}:", results.len(), kind).bold().cyan()
    );
    println!();

    match kind {
        MediaKind::Movies => {
            println!(" {:>4} | {}", "#", "Title");
            println!("{}", "-".repeat(60));
            for (i, movie) in results.iter().enumerate() {
                println!(" {:>4} | {}", i + 1, movie.name);
            }
        }
        MediaKind::Shows => {
            println!(" {:>4} | {:<40} | {}", "#", "Show", "Episodes");
            println!("{}", "-".repeat(60));
            for (i, show) in results.iter().enumerate() {
                let title = if show.name.chars().count() > 38 {
                    format!("{}...", show.name.chars().take(35).collect::<String>())
                } else {
                    show.name.clone()
                };
                let episodes = show.episodes.as_deref().unwrap_or_default();
                println!(" {:>4} | {:<40} | {}", i + 1, title, episodes.len());
                for episode in episodes {
                    println!("        {}", episode.dimmed());
                }
            }
        }
    }
    println!();
}
