//! Configuration for Storefront API

use axum::http::HeaderValue;
use axum_helpers::parse_origins;
use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Origin of the storefront web client in local development.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Parsed from comma-separated `CORS_ALLOWED_ORIGIN`
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }
        let server = ServerConfig::from_env()?;
        let cors_origins = parse_origins(&env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN));

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            cors_origins,
        })
    }
}
