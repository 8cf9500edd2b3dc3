//! Directory scanner module.
//!
//! Walks a library root depth-first and turns accepted media files into
//! tidied titles (movies) or grouped shows (TV). Any traversal error aborts
//! the scan; callers never see a partial listing.

use crate::core::filter::MediaFilter;
use crate::core::grouper::ShowIndex;
use crate::core::normalizer::tidy_name;
use crate::core::show_name::ShowNameStrategy;
use crate::error::{ScanError, ScanErrorKind};
use crate::models::media::{MediaEntity, RawFileEntry};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

/// Lazy depth-first walk over everything below a root directory.
///
/// Entries within a directory come in file-name order. The root itself is not
/// yielded. The first error ends the walk.
pub struct Walk<'a> {
    root: PathBuf,
    inner: walkdir::IntoIter,
    cancel: Option<&'a CancellationToken>,
    done: bool,
}

impl std::fmt::Debug for Walk<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("root", &self.root)
            .field("done", &self.done)
            .finish()
    }
}

impl Iterator for Walk<'_> {
    type Item = Result<RawFileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if self.cancel.is_some_and(|c| c.is_cancelled()) {
                self.done = true;
                return Some(Err(ScanError::canceled(&self.root)));
            }

            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.done = true;
                    return Some(Err(ScanError::from_walk(&e, &self.root)));
                }
            };

            let is_dir = entry.file_type().is_dir();
            if entry.depth() == 0 {
                // A symlinked root is followed; links below it are not.
                if is_dir || (entry.path_is_symlink() && entry.path().is_dir()) {
                    continue;
                }
                self.done = true;
                return Some(Err(ScanError::new(ScanErrorKind::IoFailure, &self.root)));
            }

            return Some(Ok(RawFileEntry {
                path: entry.into_path(),
                is_dir,
            }));
        }
    }
}

/// Start a walk below `root`.
pub fn walk<'a>(root: &Path, cancel: Option<&'a CancellationToken>) -> Walk<'a> {
    Walk {
        root: root.to_path_buf(),
        inner: WalkDir::new(root)
            .follow_links(false)
            .follow_root_links(true)
            .sort_by_file_name()
            .into_iter(),
        cancel,
        done: false,
    }
}

/// Counters gathered during one scan, for logging.
#[derive(Debug, Default, Clone, Copy)]
struct ScanStats {
    files: usize,
    dirs: usize,
    accepted: usize,
}

impl ScanStats {
    fn record(&mut self, entry: &RawFileEntry, accepted: bool) {
        if entry.is_dir {
            self.dirs += 1;
        } else {
            self.files += 1;
        }
        if accepted {
            self.accepted += 1;
        }
    }
}

/// Scans library roots through a media filter.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    filter: MediaFilter,
}

impl DirectoryScanner {
    pub fn new(filter: MediaFilter) -> Self {
        Self { filter }
    }

    /// Visit every accepted media file below `root`, in walk order.
    fn for_each_media<F>(
        &self,
        root: &Path,
        cancel: Option<&CancellationToken>,
        mut visit: F,
    ) -> Result<ScanStats, ScanError>
    where
        F: FnMut(&str),
    {
        let mut stats = ScanStats::default();

        for entry in walk(root, cancel) {
            let entry = entry.map_err(|e| {
                tracing::debug!("Scan of {} aborted: {}", root.display(), e);
                e
            })?;

            let accepted = self.filter.accepts_entry(&entry);
            stats.record(&entry, accepted);

            if accepted {
                visit(&entry.file_name());
            } else if !entry.is_dir {
                tracing::debug!("Skipping non-media file: {}", entry.path.display());
            }
        }

        Ok(stats)
    }

    /// Scan movies: one tidied title per accepted file, in walk order.
    pub fn scan_flat(
        &self,
        root: &Path,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<String>, ScanError> {
        let mut names = Vec::new();
        let stats = self.for_each_media(root, cancel, |filename| {
            names.push(tidy_name(filename));
        })?;

        tracing::info!(
            "Scanned {} files in {} directories under {}: {} media files",
            stats.files,
            stats.dirs,
            root.display(),
            stats.accepted
        );

        Ok(names)
    }

    /// Scan TV: accepted files are grouped under the show name `strategy`
    /// derives, shows in first-seen order.
    pub fn scan_grouped(
        &self,
        root: &Path,
        strategy: &dyn ShowNameStrategy,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<MediaEntity>, ScanError> {
        let mut index = ShowIndex::new();
        let stats = self.for_each_media(root, cancel, |filename| {
            index.insert(strategy.show_name(filename), tidy_name(filename));
        })?;

        tracing::info!(
            "Scanned {} files in {} directories under {}: {} episodes in {} shows",
            stats.files,
            stats.dirs,
            root.display(),
            stats.accepted,
            index.len()
        );

        Ok(index.into_entities())
    }
}
