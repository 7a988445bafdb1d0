//! HTTP handlers for Settings API

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestEmptyUpdateResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::SettingsResult;
use crate::models::{SettingsResponse, UpdateSettings};
use crate::repository::SettingsRepository;
use crate::service::SettingsService;

/// OpenAPI documentation for Settings API
#[derive(OpenApi)]
#[openapi(
    paths(get_settings, update_settings),
    components(
        schemas(SettingsResponse, UpdateSettings),
        responses(
            BadRequestEmptyUpdateResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Settings", description = "Storefront site settings")
    )
)]
pub struct ApiDoc;

/// Create the settings router
pub fn router<R: SettingsRepository + 'static>(service: SettingsService<R>) -> Router {
    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .with_state(Arc::new(service))
}

/// Fetch the site settings, creating defaults on first access
#[utoipa::path(
    get,
    path = "",
    tag = "Settings",
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_settings<R: SettingsRepository>(
    State(service): State<Arc<SettingsService<R>>>,
) -> SettingsResult<Json<SettingsResponse>> {
    Ok(Json(service.get_settings().await?))
}

/// Update the supplied settings fields
#[utoipa::path(
    put,
    path = "",
    tag = "Settings",
    request_body = UpdateSettings,
    responses(
        (status = 200, description = "Updated settings", body = SettingsResponse),
        (status = 400, response = BadRequestEmptyUpdateResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_settings<R: SettingsRepository>(
    State(service): State<Arc<SettingsService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateSettings>,
) -> SettingsResult<Json<SettingsResponse>> {
    Ok(Json(service.update_settings(input).await?))
}
