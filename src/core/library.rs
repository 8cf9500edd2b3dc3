//! Library queries.
//!
//! Every query walks the configured root afresh; nothing is cached between
//! calls, so concurrent queries share no mutable state.

use crate::core::filter::MediaFilter;
use crate::core::scanner::DirectoryScanner;
use crate::core::search::search;
use crate::core::show_name::{MarkerTokenExtractor, ShowNameStrategy};
use crate::error::ScanError;
use crate::models::config::LibraryConfig;
use crate::models::media::{MediaEntity, MediaKind};
use tokio_util::sync::CancellationToken;

/// Movie and TV library rooted at configured directories.
pub struct MediaLibrary {
    config: LibraryConfig,
    scanner: DirectoryScanner,
    strategy: Box<dyn ShowNameStrategy>,
}

impl std::fmt::Debug for MediaLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaLibrary")
            .field("config", &self.config)
            .field("scanner", &self.scanner)
            .finish_non_exhaustive()
    }
}

impl MediaLibrary {
    /// Create a library using the configured extensions and show markers.
    pub fn new(config: LibraryConfig) -> Self {
        let scanner = DirectoryScanner::new(MediaFilter::new(&config.extensions));
        let strategy = Box::new(MarkerTokenExtractor::new(&config.show_markers));
        Self {
            config,
            scanner,
            strategy,
        }
    }

    /// Replace the show-name strategy.
    pub fn with_strategy(mut self, strategy: impl ShowNameStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Movies whose title contains `term`.
    pub fn list_movies(&self, term: &str) -> Result<Vec<MediaEntity>, ScanError> {
        self.scan_movies(term, None)
    }

    /// Shows whose name contains `term`, each with its full episode list.
    pub fn list_shows(&self, term: &str) -> Result<Vec<MediaEntity>, ScanError> {
        self.scan_shows(term, None)
    }

    /// Like [`MediaLibrary::list_movies`], aborting with a canceled error once
    /// `cancel` fires.
    pub fn list_movies_cancellable(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        self.scan_movies(term, Some(cancel))
    }

    /// Like [`MediaLibrary::list_shows`], aborting with a canceled error once
    /// `cancel` fires.
    pub fn list_shows_cancellable(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        self.scan_shows(term, Some(cancel))
    }

    /// Dispatch on library kind.
    pub fn list(&self, kind: MediaKind, term: &str) -> Result<Vec<MediaEntity>, ScanError> {
        self.list_with(kind, term, None)
    }

    /// Dispatch on library kind with an optional cancellation token.
    pub fn list_with(
        &self,
        kind: MediaKind,
        term: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        match kind {
            MediaKind::Movies => self.scan_movies(term, cancel),
            MediaKind::Shows => self.scan_shows(term, cancel),
        }
    }

    fn scan_movies(
        &self,
        term: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        let names = self.scanner.scan_flat(&self.config.movie_dir, cancel)?;
        let movies = names.into_iter().map(MediaEntity::movie).collect();
        Ok(search(movies, term))
    }

    fn scan_shows(
        &self,
        term: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        let shows = self
            .scanner
            .scan_grouped(&self.config.tv_dir, self.strategy.as_ref(), cancel)?;
        Ok(search(shows, term))
    }
}
