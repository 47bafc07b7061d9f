//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::StoreError;
use postboard_core::ports::{CommentRepository, PostRepository, ProfileRepository, SnapshotStore};
use postboard_infra::{JsonFileSnapshotStore, ResourceStore, StoreConfig};

/// Shared application state.
///
/// All three repositories are views of the same [`ResourceStore`], so
/// every request is serialized against one lock.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub profile: Arc<dyn ProfileRepository>,
}

impl AppState {
    /// Open the durable store described by `config`.
    pub async fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        tracing::info!(path = %config.path.display(), "Opening store");

        let gateway: Arc<dyn SnapshotStore> = Arc::new(JsonFileSnapshotStore::new(&config.path));
        let store = ResourceStore::open(gateway, config.id_policy).await?;

        tracing::info!("Application state initialized");
        Ok(Self::from_store(Arc::new(store)))
    }

    pub fn from_store(store: Arc<ResourceStore>) -> Self {
        Self {
            posts: store.clone(),
            comments: store.clone(),
            profile: store,
        }
    }
}
