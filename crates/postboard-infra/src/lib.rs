//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`:
//! the in-memory resource store and the gateways that persist it.

pub mod persistence;
pub mod store;

pub use persistence::{InMemorySnapshotStore, JsonFileSnapshotStore};
pub use store::{IdPolicy, ResourceStore, StoreConfig};
