//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use postboard_infra::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = StoreConfig::default();

        let id_policy = match env::var("ID_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}. Falling back to {:?} ids.", e, defaults.id_policy);
                defaults.id_policy
            }),
            Err(_) => defaults.id_policy,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5050),
            store: StoreConfig {
                path: env::var("DB_PATH").map(PathBuf::from).unwrap_or(defaults.path),
                id_policy,
            },
        }
    }
}
