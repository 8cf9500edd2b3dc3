//! `serve` command implementation.

use crate::models::config::Config;
use crate::Result;
use colored::Colorize;

/// Run the HTTP server, applying command-line overrides to the config.
pub async fn execute_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    println!("{}", "🎬 Media index server".bold().cyan());
    println!("  Movies:   {}", config.library.movie_dir.display());
    println!("  TV shows: {}", config.library.tv_dir.display());
    println!();

    crate::server::serve(config).await
}
