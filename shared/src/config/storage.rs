//! Repository backend selection

use serde::{Deserialize, Serialize};

/// Which repository implementations the server wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MySQL through the infrastructure crate
    #[serde(rename = "mysql")]
    MySql,
    /// Process-local maps, lost on restart
    Memory,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::MySql
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::MySql => write!(f, "mysql"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_serialization() {
        assert_eq!(serde_json::to_string(&StorageBackend::MySql).unwrap(), "\"mysql\"");
        assert_eq!(serde_json::to_string(&StorageBackend::Memory).unwrap(), "\"memory\"");

        let parsed: StorageConfig = serde_json::from_str(r#"{"backend":"memory"}"#).unwrap();
        assert_eq!(parsed.backend, StorageBackend::Memory);

        let empty: StorageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.backend, StorageBackend::MySql);
    }
}
