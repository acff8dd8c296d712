//! Store configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Key under which the cart snapshot is stored.
pub const DEFAULT_STORAGE_KEY: &str = "@cart";

/// What to do when the persisted snapshot cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptSnapshotPolicy {
    /// Log a warning and start with an empty cart.
    #[default]
    Reset,
    /// Refuse to load.
    Fail,
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage slot for the cart snapshot.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Handling of malformed snapshots on load.
    #[serde(default)]
    pub on_corrupt: CorruptSnapshotPolicy,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            on_corrupt: CorruptSnapshotPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        toml::from_str(content).map_err(|e| CartError::Config(e.to_string()))
    }

    /// Load config from a file. Paths ending in `.json` are read as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CartError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed: Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|e| CartError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the corrupt snapshot policy.
    pub fn with_on_corrupt(mut self, policy: CorruptSnapshotPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info` or `cart_store=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "@cart");
        assert_eq!(config.on_corrupt, CorruptSnapshotPolicy::Reset);
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
            storage_key = "@cart-v2"
            on_corrupt = "fail"

            [logging]
            filter = "cart_store=debug"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_key, "@cart-v2");
        assert_eq!(config.on_corrupt, CorruptSnapshotPolicy::Fail);
        assert_eq!(config.logging.filter, "cart_store=debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let err = StoreConfig::from_toml_str(r#"on_corrupt = "ignore""#).unwrap_err();
        assert!(matches!(err, CartError::Config(_)));
    }

    #[test]
    fn test_load_json_and_toml_files() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("cart.json");
        std::fs::write(&json_path, r#"{"storage_key":"@json"}"#).unwrap();
        assert_eq!(StoreConfig::load(&json_path).unwrap().storage_key, "@json");

        let toml_path = dir.path().join("cart.toml");
        std::fs::write(&toml_path, r#"storage_key = "@toml""#).unwrap();
        assert_eq!(StoreConfig::load(&toml_path).unwrap().storage_key, "@toml");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CartError::Config(msg) if msg.contains("failed to read")));
    }
}
