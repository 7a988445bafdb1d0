use mongodb::{
    Client, Collection, IndexModel,
    bson::{Document, doc},
    options::{ClientOptions, IndexOptions},
};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;

/// Error type for MongoDB connection management
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect using a MongoConfig and verify the server answers a ping.
///
/// The returned `Client` is a cheap, cloneable handle over a shared pool;
/// create it once at startup and pass it (or a `Database`) to repositories.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "storefront");
/// let client = connect_from_config(&config).await?;
/// let db = client.database(config.database());
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Idempotently create a single-field unique index named `<field>_1`.
///
/// Re-running with the same definition is a no-op on the server, so this is
/// safe to call on every startup.
pub async fn ensure_unique_index<T>(
    collection: &Collection<T>,
    field: &str,
) -> Result<(), mongodb::error::Error>
where
    T: Send + Sync,
{
    let mut keys = Document::new();
    keys.insert(field, 1);

    let index = IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(format!("{field}_1"))
                .build(),
        )
        .build();

    collection.create_index(index).await?;
    info!(collection = collection.name(), field, "Unique index ensured");
    Ok(())
}
