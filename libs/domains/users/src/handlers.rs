use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateAdmin, Role, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_admin),
    components(
        schemas(CreateAdmin, UserResponse, Role),
        responses(BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "Administrator provisioning")
    )
)]
pub struct ApiDoc;

/// Create the users router
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/admin", post(create_admin))
        .with_state(Arc::new(service))
}

/// Provision an administrator account
#[utoipa::path(
    post,
    path = "/admin",
    tag = "Users",
    request_body = CreateAdmin,
    responses(
        (status = 201, description = "Administrator created", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_admin<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAdmin>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_admin(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
