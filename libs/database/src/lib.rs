//! Database connectors and utilities.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connection, index and error helpers
//! - `config` - `core_config::FromEnv` support for connection settings
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
