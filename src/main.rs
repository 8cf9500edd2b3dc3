//! Media Index CLI
//!
//! Serves or queries a local movie and TV library.

use clap::Parser;
use media_index::cli::{
    args::{Cli, Commands},
    commands::{list, serve},
    resolve_config,
};
use media_index::models::media::MediaKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Serve { host, port } => {
            serve::execute_serve(config, host, port).await?;
        }

        Commands::Movies { query } => {
            list::execute_list(config.library, MediaKind::Movies, &query.search, query.format)?;
        }

        Commands::Shows { query } => {
            list::execute_list(config.library, MediaKind::Shows, &query.search, query.format)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_index=debug,tower_http=debug")
    } else {
        EnvFilter::new("media_index=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
