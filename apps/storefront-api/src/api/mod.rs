//! API routes module

pub mod health;
pub mod products;
pub mod settings;
pub mod users;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Full application router: resource and health routes behind the shared
/// middleware stack.
pub fn app(state: &AppState) -> io::Result<Router> {
    let routes = routes(state)
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()));

    create_router::<ApiDoc>(routes, &state.config.cors_origins)
}

/// Create all resource routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/products", products::router(state))
        .nest("/settings", settings::router(state))
}

/// Ensure unique indexes on `users.username`, `users.email` and `products.code`
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    users::init_indexes(state).await?;
    products::init_indexes(state).await
}
