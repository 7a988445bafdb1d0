//! Settings Service - lazy creation and partial updates of the singleton

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{SettingsError, SettingsResult};
use crate::models::{SettingsResponse, UpdateSettings};
use crate::repository::SettingsRepository;

pub struct SettingsService<R: SettingsRepository> {
    repository: Arc<R>,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Current settings, created from defaults on first access
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> SettingsResult<SettingsResponse> {
        let settings = match self.repository.find().await? {
            Some(settings) => settings,
            None => self.repository.insert_defaults().await?,
        };
        Ok(settings.into())
    }

    /// Update the supplied fields
    #[instrument(skip(self, input))]
    pub async fn update_settings(&self, input: UpdateSettings) -> SettingsResult<SettingsResponse> {
        if input.is_empty() {
            return Err(SettingsError::EmptyUpdate);
        }

        input
            .validate()
            .map_err(|e| SettingsError::Validation(e.to_string()))?;

        let settings = self.repository.upsert(input).await?;
        Ok(settings.into())
    }
}
