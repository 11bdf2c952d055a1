//! The cached status record and its store
//!
//! One background writer replaces the snapshot, any number of request
//! handlers read it. The whole record is swapped under the lock, so a reader
//! sees either the old or the new value, never a mix of both.

use std::sync::Arc;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;

/// Marker for "no usable data"
pub const NONE: &str = "none";

/// Broadcast flag value of a video that is live right now
pub const LIVE: &str = "live";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Broadcast flag of the selected video, or `none`
    #[serde(rename = "livestreamStatus")]
    pub status: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
    /// `live` while live, otherwise stream end time or publish time
    pub updated: String,
    #[serde(with = "time::serde::rfc3339")]
    pub fetched_at: OffsetDateTime,
}

impl Snapshot {
    /// The sentinel snapshot used whenever no video could be selected
    pub fn none(fetched_at: OffsetDateTime) -> Self {
        Self {
            status: NONE.to_string(),
            video_id: NONE.to_string(),
            updated: NONE.to_string(),
            fetched_at,
        }
    }

    pub fn is_none(&self) -> bool {
        self.status == NONE && self.video_id == NONE && self.updated == NONE
    }

    pub fn is_live(&self) -> bool {
        self.status == LIVE
    }
}

/// Shared handle to the current snapshot
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(initial))),
        }
    }

    /// Current snapshot; holds the read lock only long enough to clone the `Arc`
    pub async fn read(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Replace the current snapshot
    ///
    /// `fetched_at` never goes backwards: a snapshot stamped earlier than the
    /// current one (clock stepped back) takes over the current timestamp.
    pub async fn write(&self, mut snapshot: Snapshot) {
        let mut current = self.current.write().await;
        if snapshot.fetched_at < current.fetched_at {
            tracing::warn!(
                "snapshot fetched_at {} is older than current {}, clamping",
                snapshot.fetched_at,
                current.fetched_at
            );
            snapshot.fetched_at = current.fetched_at;
        }
        *current = Arc::new(snapshot);
    }
}
