//! Server configuration.

use serde::Deserialize;

/// Server configuration settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Name reported in diagnostics.
    pub name: String,
    /// Largest raw request accepted, in bytes.
    pub max_request_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "msgpair".to_string(),
            max_request_bytes: 1024 * 1024, // 1 MiB
        }
    }
}
