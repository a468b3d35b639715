use axum::{
    extract::State,
    Json,
    http::StatusCode,
};
use serde::Serialize;
use crate::entry::DictionaryEntry;
use crate::server::AppState;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Failed to gather dictionary data: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
}

pub async fn gather_dictionary_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DictionaryEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let store = Arc::clone(&state.store);

    // The scan is unbounded, keep it off the runtime workers.
    let entries = tokio::task::spawn_blocking(move || {
        // Read-only access, a poisoned lock still guards a consistent store.
        let store = store.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        store.fetch_all()
    })
    .await
    .map_err(internal_error)?
    .map_err(internal_error)?;

    Ok(Json(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::NewEntry;
    use crate::storage::SqliteStore;

    #[tokio::test]
    async fn test_empty_store_returns_empty_array() {
        let state = AppState::new(SqliteStore::open_in_memory().unwrap());

        let Json(entries) = gather_dictionary_data(State(state)).await.ok().unwrap();
        assert!(entries.is_empty());
        assert_eq!(serde_json::to_string(&entries).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_returns_every_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        for word in ["foo", "bar", "baz"] {
            store.insert_entry(&NewEntry::new(word, "", "", "", "", "")).unwrap();
        }
        let state = AppState::new(store);

        let Json(entries) = gather_dictionary_data(State(state.clone())).await.ok().unwrap();
        assert_eq!(entries.len(), state.store.lock().unwrap().count_entries().unwrap());

        let Json(again) = gather_dictionary_data(State(state)).await.ok().unwrap();
        assert_eq!(entries, again);
    }

    #[tokio::test]
    async fn test_query_failure_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("dictionaryDatabase.db");
        let state = AppState::new(SqliteStore::open(&db_path).unwrap());

        rusqlite::Connection::open(&db_path)
            .unwrap()
            .execute("DROP TABLE dictionaryData", [])
            .unwrap();

        let (status, Json(body)) = gather_dictionary_data(State(state)).await.err().unwrap();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_scan_does_not_block_the_runtime() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_entry(&NewEntry::new("foo", "", "", "", "", "")).unwrap();
        let state = AppState::new(store);

        // Current-thread runtime: if the handler waited on the lock inline,
        // the sleep below could never complete.
        let guard = state.store.lock().unwrap();
        let request = tokio::spawn(gather_dictionary_data(State(state.clone())));
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!request.is_finished());

        drop(guard);
        let Json(entries) = request.await.unwrap().ok().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
