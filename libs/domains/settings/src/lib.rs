//! Settings Domain
//!
//! The storefront's site-wide settings (hero banner, contact details), kept
//! as a single MongoDB document under the fixed `_id` [`models::SETTINGS_ID`].
//! The document is created from defaults on first read or first update.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_settings::{handlers, MongoSettingsRepository, SettingsService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoSettingsRepository::new(&client.database("recuerdos_eternos_db"));
//!
//! let router = handlers::router(SettingsService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{SettingsError, SettingsResult};
pub use handlers::ApiDoc;
pub use models::{SETTINGS_ID, SettingsResponse, SiteSettings, UpdateSettings};
pub use mongodb::MongoSettingsRepository;
pub use repository::SettingsRepository;
pub use service::SettingsService;
