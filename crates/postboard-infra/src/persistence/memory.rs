//! In-memory snapshot store - used when no durable file is wanted.
//!
//! Note: Data is lost on process restart.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::StoreError;
use postboard_core::domain::StoreSnapshot;
use postboard_core::ports::SnapshotStore;

/// Keeps the last saved snapshot in memory and counts saves.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<StoreSnapshot>,
    saves: AtomicUsize,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, as if it had been loaded from disk.
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            saves: AtomicUsize::new(0),
        }
    }

    /// The most recently saved snapshot.
    pub async fn current(&self) -> StoreSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError> {
        *self.snapshot.write().await = snapshot.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
