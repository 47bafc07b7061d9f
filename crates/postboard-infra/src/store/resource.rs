//! The shared resource store.
//!
//! Posts, comments and the profile sit behind one async `RwLock`. Reads
//! share the lock; every mutation holds the write lock until the new
//! snapshot has been handed to the persistence gateway, so
//! read-modify-write-persist is atomic per call.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::StoreError;
use postboard_core::domain::{Comment, Post, Profile, ProfileDraft, Record, StoreSnapshot};
use postboard_core::ports::{
    BaseRepository, CommentRepository, PostRepository, ProfileRepository, SnapshotStore,
};

use super::collection::{Collection, IdPolicy};

struct StoreState {
    posts: Collection<Post>,
    comments: Collection<Comment>,
    profile: Option<Profile>,
}

impl StoreState {
    fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            posts: Collection::new(snapshot.posts),
            comments: Collection::new(snapshot.comments),
            profile: snapshot.profile,
        }
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            posts: self.posts.records().to_vec(),
            comments: self.comments.records().to_vec(),
            profile: self.profile.clone(),
        }
    }
}

/// Selects the collection holding records of type `T`.
trait Holds<T: Record> {
    fn collection(&self) -> &Collection<T>;
    fn collection_mut(&mut self) -> &mut Collection<T>;
}

impl Holds<Post> for StoreState {
    fn collection(&self) -> &Collection<Post> {
        &self.posts
    }

    fn collection_mut(&mut self) -> &mut Collection<Post> {
        &mut self.posts
    }
}

impl Holds<Comment> for StoreState {
    fn collection(&self) -> &Collection<Comment> {
        &self.comments
    }

    fn collection_mut(&mut self) -> &mut Collection<Comment> {
        &mut self.comments
    }
}

/// In-memory store for all three resources, mirrored to a [`SnapshotStore`].
pub struct ResourceStore {
    state: RwLock<StoreState>,
    gateway: Arc<dyn SnapshotStore>,
    policy: IdPolicy,
}

impl ResourceStore {
    /// Load the store through `gateway`.
    ///
    /// Fails when the durable state cannot be read or parsed.
    pub async fn open(gateway: Arc<dyn SnapshotStore>, policy: IdPolicy) -> Result<Self, StoreError> {
        let snapshot = gateway.load().await?;

        tracing::info!(
            posts = snapshot.posts.len(),
            comments = snapshot.comments.len(),
            profile = snapshot.profile.is_some(),
            ?policy,
            "Resource store opened"
        );

        Ok(Self {
            state: RwLock::new(StoreState::from_snapshot(snapshot)),
            gateway,
            policy,
        })
    }

    /// Copy of the whole store.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.snapshot()
    }

    async fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        self.gateway.save(&state.snapshot()).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist store");
        })
    }

    async fn list_of<T: Record>(&self) -> Vec<T>
    where
        StoreState: Holds<T>,
    {
        let state = self.state.read().await;
        Holds::<T>::collection(&*state).records().to_vec()
    }

    async fn find_in<T: Record>(&self, id: u64) -> Option<T>
    where
        StoreState: Holds<T>,
    {
        let state = self.state.read().await;
        Holds::<T>::collection(&*state).find(id).cloned()
    }

    async fn filter_in<T: Record>(&self, predicate: impl Fn(&T) -> bool + Send) -> Vec<T>
    where
        StoreState: Holds<T>,
    {
        let state = self.state.read().await;
        Holds::<T>::collection(&*state).filter(predicate)
    }

    async fn create_in<T: Record>(&self, draft: T::Draft) -> Result<T, StoreError>
    where
        StoreState: Holds<T>,
    {
        let mut state = self.state.write().await;
        let record = Holds::<T>::collection_mut(&mut *state).insert(self.policy, draft);
        self.persist(&state).await?;

        tracing::debug!(kind = T::KIND, id = record.id(), "Record created");
        Ok(record)
    }

    async fn update_in<T: Record>(&self, id: u64, draft: T::Draft) -> Result<Option<T>, StoreError>
    where
        StoreState: Holds<T>,
    {
        let mut state = self.state.write().await;
        let Some(record) = Holds::<T>::collection_mut(&mut *state).replace(id, draft) else {
            tracing::debug!(kind = T::KIND, id, "Update skipped, no such record");
            return Ok(None);
        };
        self.persist(&state).await?;

        tracing::debug!(kind = T::KIND, id, "Record updated");
        Ok(Some(record))
    }

    async fn delete_in<T: Record>(&self, id: u64) -> Result<Vec<T>, StoreError>
    where
        StoreState: Holds<T>,
    {
        let mut state = self.state.write().await;
        let removed = Holds::<T>::collection_mut(&mut *state).remove(id);
        self.persist(&state).await?;

        tracing::debug!(kind = T::KIND, id, removed, "Record deleted");
        Ok(Holds::<T>::collection(&*state).records().to_vec())
    }
}

macro_rules! impl_base_repository {
    ($record:ty) => {
        #[async_trait]
        impl BaseRepository<$record> for ResourceStore {
            async fn list(&self) -> Vec<$record> {
                self.list_of::<$record>().await
            }

            async fn find_by_id(&self, id: u64) -> Option<$record> {
                self.find_in::<$record>(id).await
            }

            async fn create(
                &self,
                draft: <$record as Record>::Draft,
            ) -> Result<$record, StoreError> {
                self.create_in::<$record>(draft).await
            }

            async fn update(
                &self,
                id: u64,
                draft: <$record as Record>::Draft,
            ) -> Result<Option<$record>, StoreError> {
                self.update_in::<$record>(id, draft).await
            }

            async fn delete(&self, id: u64) -> Result<Vec<$record>, StoreError> {
                self.delete_in::<$record>(id).await
            }
        }
    };
}

impl_base_repository!(Post);
impl_base_repository!(Comment);

#[async_trait]
impl PostRepository for ResourceStore {
    async fn find_by_author(&self, author: &str) -> Vec<Post> {
        self.filter_in::<Post>(|post| post.author == author).await
    }
}

#[async_trait]
impl CommentRepository for ResourceStore {
    async fn find_by_post_id(&self, post_id: i64) -> Vec<Comment> {
        self.filter_in::<Comment>(|comment| comment.post_id == post_id)
            .await
    }
}

#[async_trait]
impl ProfileRepository for ResourceStore {
    async fn get(&self) -> Option<Profile> {
        self.state.read().await.profile.clone()
    }

    async fn set(&self, draft: ProfileDraft) -> Result<Profile, StoreError> {
        let mut state = self.state.write().await;
        let profile = Profile::from(draft);
        state.profile = Some(profile.clone());
        self.persist(&state).await?;

        tracing::debug!("Profile replaced");
        Ok(profile)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.profile = None;
        self.persist(&state).await?;

        tracing::debug!("Profile cleared");
        Ok(())
    }
}
