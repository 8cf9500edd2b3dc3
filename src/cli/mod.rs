//! Command line interface.

pub mod args;
pub mod commands;

use crate::models::config::{self, Config};
use crate::Result;

/// Load the config file and apply the global directory overrides.
pub fn resolve_config(cli: &args::Cli) -> Result<Config> {
    let mut config = config::load_config(cli.config.as_deref())?;

    if let Some(dir) = &cli.movie_dir {
        config.library.movie_dir = dir.clone();
    }
    if let Some(dir) = &cli.tv_dir {
        config.library.tv_dir = dir.clone();
    }

    Ok(config)
}
