use async_trait::async_trait;

use crate::domain::StoreSnapshot;
use crate::error::StoreError;

/// Durable home of the store - the persistence gateway.
///
/// The gateway only ever produces a whole snapshot (on load) or receives
/// one to write (on save). It never holds on to live store state.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot, initializing durable state when none exists.
    async fn load(&self) -> Result<StoreSnapshot, StoreError>;

    /// Overwrite the durable state with `snapshot`.
    async fn save(&self, snapshot: &StoreSnapshot) -> Result<(), StoreError>;
}
