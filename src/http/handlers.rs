//! HTTP request handlers

use axum::{
    extract::State,
    response::Json,
};
use crate::snapshot::{Snapshot, SnapshotStore};

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    store: SnapshotStore,
}

impl AppState {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }
}

/// Current snapshot, straight from the store
pub async fn current_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    let snapshot = state.store.read().await;
    tracing::debug!("serving snapshot {} {}", snapshot.video_id, snapshot.updated);
    Json(Snapshot::clone(&snapshot))
}
