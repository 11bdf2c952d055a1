//! Drives refresh cycles in the background

use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use crate::snapshot::{Snapshot, SnapshotStore};

/// Produces a fresh snapshot; must not fail
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self) -> Snapshot;
}

pub struct Scheduler;

impl Scheduler {
    /// Run the first cycle in place, then keep refreshing in the background.
    ///
    /// The returned store already holds the first snapshot. The next cycle
    /// starts `period` after the previous one ended. The loop exits once
    /// `shutdown` is cancelled.
    pub async fn start<R>(
        refresher: Arc<R>,
        period: Duration,
        shutdown: CancellationToken,
    ) -> (SnapshotStore, JoinHandle<()>)
    where
        R: Refresh + ?Sized + 'static,
    {
        let first = refresher.refresh().await;
        tracing::info!("initial snapshot: {} {} {}", first.status, first.video_id, first.updated);
        let store = SnapshotStore::new(first);

        let handle = {
            let store = store.clone();
            tokio::spawn(async move {
                Self::run(refresher, store, period, shutdown).await;
            })
        };

        (store, handle)
    }

    async fn run<R>(refresher: Arc<R>, store: SnapshotStore, period: Duration, shutdown: CancellationToken)
    where
        R: Refresh + ?Sized,
    {
        tracing::info!("Refresh interval: {}s", period.as_secs());
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("scheduler stopped");
                    return;
                }
                _ = tokio::time::sleep(period) => {}
            }

            let snapshot = tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("scheduler stopped during refresh");
                    return;
                }
                snapshot = refresher.refresh() => snapshot,
            };
            tracing::debug!("refreshed snapshot: {:?}", snapshot);
            store.write(snapshot).await;
        }
    }
}
