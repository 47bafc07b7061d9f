//! Ports - trait definitions for the store and its persistence.
//! These are the "interfaces" that infrastructure must implement.

mod persistence;
mod repository;

pub use persistence::SnapshotStore;
pub use repository::{BaseRepository, CommentRepository, PostRepository, ProfileRepository};
