//! Resource store - the in-memory collections behind every handler.

mod collection;
mod config;
mod resource;

pub use collection::IdPolicy;
pub use config::StoreConfig;
pub use resource::ResourceStore;
