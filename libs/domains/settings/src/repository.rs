use async_trait::async_trait;

use crate::error::SettingsResult;
use crate::models::{SiteSettings, UpdateSettings};

/// Repository trait for the settings singleton
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the settings document, if it exists
    async fn find(&self) -> SettingsResult<Option<SiteSettings>>;

    /// Atomically create the document from defaults unless it already
    /// exists, returning whatever is stored afterwards
    async fn insert_defaults(&self) -> SettingsResult<SiteSettings>;

    /// Atomically apply the supplied fields, creating the document from
    /// defaults for everything not supplied when it does not exist yet
    async fn upsert(&self, input: UpdateSettings) -> SettingsResult<SiteSettings>;
}
