use std::path::PathBuf;

use super::IdPolicy;

/// Where the store lives and how it numbers new records.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the durable JSON file.
    pub path: PathBuf,
    pub id_policy: IdPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("db.json"),
            id_policy: IdPolicy::default(),
        }
    }
}
