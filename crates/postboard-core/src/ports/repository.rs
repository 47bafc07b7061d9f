use async_trait::async_trait;

use crate::domain::{Comment, Post, Profile, ProfileDraft, Record};
use crate::error::StoreError;

/// Generic repository trait for an ordered, ID-keyed collection.
///
/// Lookups by an unknown ID are not errors: they yield `None`.
/// Every successful mutation is persisted before the call returns.
#[async_trait]
pub trait BaseRepository<T: Record>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<T>;

    /// Find a record by its ID.
    async fn find_by_id(&self, id: u64) -> Option<T>;

    /// Assign an ID to `draft`, append it and return the stored record.
    async fn create(&self, draft: T::Draft) -> Result<T, StoreError>;

    /// Replace the content of the record with `id`, keeping its ID and position.
    async fn update(&self, id: u64, draft: T::Draft) -> Result<Option<T>, StoreError>;

    /// Remove every record with `id` and return what remains.
    async fn delete(&self, id: u64) -> Result<Vec<T>, StoreError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Posts whose author matches exactly (case-sensitive).
    async fn find_by_author(&self, author: &str) -> Vec<Post>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment> {
    /// Comments referencing `post_id`, in insertion order.
    async fn find_by_post_id(&self, post_id: i64) -> Vec<Comment>;
}

/// Singleton profile repository.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Option<Profile>;

    /// Replace the profile wholesale. Used for both create and update.
    async fn set(&self, draft: ProfileDraft) -> Result<Profile, StoreError>;

    /// Reset the profile to absent.
    async fn clear(&self) -> Result<(), StoreError>;
}
