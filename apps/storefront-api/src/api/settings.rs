//! Settings API routes

use axum::Router;
use domain_settings::{MongoSettingsRepository, SettingsService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(SettingsService::new(MongoSettingsRepository::new(&state.db)))
}
