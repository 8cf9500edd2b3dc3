//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions accepted as media files when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".mp4", ".mkv", ".avi", ".mov", ".wmv", ".m4v", ".webm", ".flv", ".mpg", ".mpeg", ".ts",
    ".m2ts",
];

/// Season/episode marker tokens, in priority order.
pub const DEFAULT_SHOW_MARKERS: &[&str] = &[" s", " season", " episode", " e"];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library configuration.
    pub library: LibraryConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
}

/// Library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Root of the movie library.
    pub movie_dir: PathBuf,
    /// Root of the TV library.
    pub tv_dir: PathBuf,
    /// Accepted media extensions, with leading dot.
    pub extensions: Vec<String>,
    /// Tokens marking where a show name ends in an episode filename.
    pub show_markers: Vec<String>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            movie_dir: home.join("movies"),
            tv_dir: home.join("tv_shows"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            show_markers: DEFAULT_SHOW_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl LibraryConfig {
    /// Library rooted at the given directories, with default extensions and markers.
    pub fn with_dirs(movie_dir: impl Into<PathBuf>, tv_dir: impl Into<PathBuf>) -> Self {
        Self {
            movie_dir: movie_dir.into(),
            tv_dir: tv_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_index")
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the default config
/// file is used when present, otherwise built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(crate::Error::PathNotFound(p.display().to_string()));
            }
            p.to_path_buf()
        }
        None => {
            let default_path = dirs_config_path().join("config.toml");
            if !default_path.exists() {
                tracing::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };

    tracing::debug!("Loading config from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    if config.library.extensions.is_empty() {
        return Err(crate::Error::Config(
            "library.extensions must not be empty".to_string(),
        ));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert!(config.library.extensions.contains(&".mp4".to_string()));
        assert_eq!(config.library.show_markers[0], " s");
        assert!(config.library.movie_dir.ends_with("movies"));
        assert!(config.library.tv_dir.ends_with("tv_shows"));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [library]
            movie_dir = "/srv/movies"
            extensions = [".mkv"]

            [server]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.library.movie_dir, PathBuf::from("/srv/movies"));
        assert_eq!(config.library.extensions, vec![".mkv".to_string()]);
        assert_eq!(config.library.show_markers.len(), 4);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_parse_rejects_empty_extensions() {
        let result = parse_config("[library]\nextensions = []\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(matches!(
            parse_config("[server\nport = 1"),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = load_config(Some(Path::new("/nonexistent/media_index.toml")));
        assert!(matches!(result, Err(crate::Error::PathNotFound(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }
}
