//! Domain entities - the records the service stores.

mod comment;
mod post;
mod profile;
mod record;
mod snapshot;

pub use comment::{Comment, CommentDraft};
pub use post::{Post, PostDraft};
pub use profile::{Profile, ProfileDraft};
pub use record::Record;
pub use snapshot::StoreSnapshot;
