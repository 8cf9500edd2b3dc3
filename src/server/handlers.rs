//! Library query handlers.

use crate::models::media::{MediaEntity, MediaKind};
use crate::server::errors::{AppError, AppResult};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use tokio_util::sync::CancellationToken;

/// Raw query string pairs, in request order. Repeated keys are allowed.
type QueryPairs = Vec<(String, String)>;

/// First `search` value in the query string, or empty when absent.
fn search_term(params: &[(String, String)]) -> String {
    params
        .iter()
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// `GET /movie?search=<term>`
pub async fn movie_handler(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<Vec<MediaEntity>>> {
    list(state, MediaKind::Movies, search_term(&params))
        .await
        .map(Json)
}

/// `GET /tv?search=<term>`
pub async fn tv_handler(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> AppResult<Json<Vec<MediaEntity>>> {
    list(state, MediaKind::Shows, search_term(&params))
        .await
        .map(Json)
}

/// Run one scan on the blocking pool.
///
/// The walk is canceled if the request is dropped before it finishes. Scan
/// failures are logged with their path but reported to the client only as a
/// generic server error.
async fn list(state: AppState, kind: MediaKind, term: String) -> AppResult<Vec<MediaEntity>> {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let library = state.library.clone();
    let result = tokio::task::spawn_blocking(move || {
        let result = library.list_with(kind, &term, Some(&cancel));
        if let Err(e) = &result {
            tracing::debug!("Scan of {} ended: {}", kind, e);
        }
        result
    })
    .await
    .map_err(|e| {
        tracing::error!("Scan task for {} failed: {}", kind, e);
        AppError::internal(failure_message(kind))
    })?;

    result.map_err(|e| {
        tracing::warn!("Failed to scan {}: {}", kind, e);
        AppError::internal(failure_message(kind))
    })
}

fn failure_message(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movies => "Failed to scan movies directory",
        MediaKind::Shows => "Failed to scan TV directory",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::show_name::ShowNameStrategy;
    use crate::core::MediaLibrary;
    use crate::models::config::LibraryConfig;
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_term_takes_first_value() {
        assert_eq!(
            search_term(&pairs(&[("search", "heat"), ("search", "x")])),
            "heat"
        );
        assert_eq!(
            search_term(&pairs(&[("page", "2"), ("search", "foo")])),
            "foo"
        );
        assert_eq!(search_term(&pairs(&[("page", "2")])), "");
        assert_eq!(search_term(&[]), "");
    }

    /// Records every file it names, and holds the first one until released.
    struct GatedStrategy {
        seen: Mutex<Sender<String>>,
        started: Mutex<Option<Sender<()>>>,
        release: Mutex<Receiver<()>>,
    }

    impl ShowNameStrategy for GatedStrategy {
        fn show_name(&self, filename: &str) -> String {
            let _ = self.seen.lock().unwrap().send(filename.to_string());
            if let Some(started) = self.started.lock().unwrap().take() {
                let _ = started.send(());
                let _ = self.release.lock().unwrap().recv();
            }
            filename.to_string()
        }
    }

    #[tokio::test]
    async fn test_dropped_request_cancels_walk() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["A.S01E01.mp4", "B.S01E01.mp4", "C.S01E01.mp4"] {
            std::fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let (seen_tx, seen_rx) = channel();
        let (started_tx, started_rx) = channel();
        let (release_tx, release_rx) = channel();
        let strategy = GatedStrategy {
            seen: Mutex::new(seen_tx),
            started: Mutex::new(Some(started_tx)),
            release: Mutex::new(release_rx),
        };
        let library = MediaLibrary::new(LibraryConfig::with_dirs(temp_dir.path(), temp_dir.path()))
            .with_strategy(strategy);
        let state = AppState::new(library);

        let request = tokio::spawn(list(state, MediaKind::Shows, String::new()));

        // Wait until the walk is parked on the first episode.
        tokio::task::spawn_blocking(move || started_rx.recv())
            .await
            .unwrap()
            .unwrap();

        // Dropping the request future fires the cancellation guard.
        request.abort();
        assert!(request.await.unwrap_err().is_cancelled());
        release_tx.send(()).unwrap();

        // The library is dropped once the walk ends, closing the channel.
        let seen: Vec<String> = tokio::task::spawn_blocking(move || seen_rx.iter().collect())
            .await
            .unwrap();
        assert_eq!(seen, vec!["A.S01E01.mp4".to_string()]);
    }

    #[tokio::test]
    async fn test_list_completes_without_cancel() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Heat.1995.mp4"), "").unwrap();
        let state = AppState::new(MediaLibrary::new(LibraryConfig::with_dirs(
            temp_dir.path(),
            temp_dir.path(),
        )));

        let movies = list(state, MediaKind::Movies, "heat".to_string())
            .await
            .unwrap();
        assert_eq!(movies, vec![MediaEntity::movie("Heat 1995")]);
    }
}
