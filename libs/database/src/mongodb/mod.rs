//! MongoDB connector and utilities
//!
//! Connection management, index bootstrap, health probes and error
//! classification shared by the MongoDB-backed domain repositories.

mod config;
mod connector;
mod errors;
mod health;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect_from_config, ensure_unique_index};
pub use errors::{DUPLICATE_KEY_CODE, duplicate_key_message};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
