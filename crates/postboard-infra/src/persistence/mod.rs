//! Persistence gateways - a durable JSON file and an in-memory fallback.

mod json_file;
mod memory;

pub use json_file::JsonFileSnapshotStore;
pub use memory::InMemorySnapshotStore;
