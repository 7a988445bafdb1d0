//! Handler tests for Settings domain
//!
//! The in-memory repository mirrors the upsert semantics of the MongoDB
//! implementation and counts how often defaults were inserted.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_settings::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // For oneshot()

#[derive(Clone, Default)]
struct InMemorySettingsRepository {
    settings: Arc<Mutex<Option<SiteSettings>>>,
    creations: Arc<AtomicUsize>,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find(&self) -> SettingsResult<Option<SiteSettings>> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn insert_defaults(&self) -> SettingsResult<SiteSettings> {
        let mut stored = self.settings.lock().unwrap();
        let settings = stored.get_or_insert_with(|| {
            self.creations.fetch_add(1, Ordering::SeqCst);
            SiteSettings::default()
        });
        Ok(settings.clone())
    }

    async fn upsert(&self, input: UpdateSettings) -> SettingsResult<SiteSettings> {
        let mut stored = self.settings.lock().unwrap();
        let settings = stored.get_or_insert_with(|| {
            self.creations.fetch_add(1, Ordering::SeqCst);
            SiteSettings::default()
        });
        settings.apply_update(input);
        Ok(settings.clone())
    }
}

async fn send(app: &Router, method: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri("/");
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_creates_defaults_exactly_once() {
    let repo = InMemorySettingsRepository::default();
    let app = handlers::router(SettingsService::new(repo.clone()));

    let (status, first) = send(&app, "GET", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], "site");
    assert_eq!(first["heroTitle"], "Honrando su Memoria con Amor");
    assert_eq!(first["email"], "info@recuerdoseternos.com");

    let (status, second) = send(&app, "GET", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
    assert_eq!(repo.creations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_update_on_empty_store_fills_remaining_defaults() {
    let repo = InMemorySettingsRepository::default();
    let app = handlers::router(SettingsService::new(repo.clone()));

    let (status, body) = send(&app, "PUT", Some(json!({"whatsappNumber": "5215512345678"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["whatsappNumber"], "5215512345678");
    assert_eq!(body["address"], "123 Calle Falsa, Ciudad");
    assert_eq!(repo.creations.load(Ordering::SeqCst), 1);

    let (_, fetched) = send(&app, "GET", None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_empty_or_null_update_is_rejected() {
    let repo = InMemorySettingsRepository::default();
    let app = handlers::router(SettingsService::new(repo.clone()));

    let (status, body) = send(&app, "PUT", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, _) = send(&app, "PUT", Some(json!({"heroTitle": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(repo.settings.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = handlers::router(SettingsService::new(InMemorySettingsRepository::default()));

    let (status, body) = send(&app, "PUT", Some(json!({"email": "nope"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());
}
