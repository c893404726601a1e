//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! $CONSUMER_CONFIG (TOML, optional)
//!     → loader.rs (read & deserialize, or defaults)
//!     → validation.rs (semantic checks)
//!     → ConsumerConfig (validated, immutable)
//! ```
//!
//! The backend address itself is NOT part of the config. Only the name of
//! the environment variable holding it is; the value is read per request.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError, CONFIG_PATH_VAR};
pub use schema::{BackendConfig, ConsumerConfig, ListenerConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
