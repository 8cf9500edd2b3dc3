//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Media Index - Search your local movie and TV library
#[derive(Parser, Debug)]
#[command(name = "media-index")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config.toml file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Movie library root (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub movie_dir: Option<PathBuf>,

    /// TV library root (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub tv_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List movies in the library
    Movies {
        #[command(flatten)]
        query: ListArgs,
    },

    /// List TV shows and their episodes
    Shows {
        #[command(flatten)]
        query: ListArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive title filter
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Simple,
    Json,
}
