//! Configuration schema definitions.
//!
//! All sections derive Serde traits and default every field, so an empty
//! file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the consumer.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ConsumerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where the backend address comes from.
    pub backend: BackendConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:80").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:80".to_string(),
        }
    }
}

/// Backend lookup configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Environment variable holding `host[:port]` of the backend.
    pub env_var: String,

    /// Name the backend was linked under. A linked service registered under
    /// a name is exposed as `BACKEND_<name>`; when set, this wins over
    /// `env_var`.
    pub linked_name: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            env_var: "BACKEND".to_string(),
            linked_name: None,
        }
    }
}

impl BackendConfig {
    /// The environment variable actually read for the backend address.
    pub fn variable(&self) -> String {
        match &self.linked_name {
            Some(name) => format!("BACKEND_{}", name),
            None => self.env_var.clone(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
