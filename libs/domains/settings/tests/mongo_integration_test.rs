//! Integration tests for the MongoDB settings repository
//!
//! Runs the singleton upserts against a real MongoDB via testcontainers, so
//! the server checks that `$set` and `$setOnInsert` never name the same path.
//!
//! They need Docker: `cargo test -p domain_settings -- --ignored`.

use domain_settings::models::{DEFAULT_ADDRESS, DEFAULT_HERO_TITLE};
use domain_settings::{
    MongoSettingsRepository, SETTINGS_ID, SettingsRepository, SettingsService, SiteSettings,
    UpdateSettings,
};
use test_utils::TestMongo;

async fn settings_count(mongo: &TestMongo) -> u64 {
    mongo
        .database()
        .collection::<SiteSettings>("settings")
        .count_documents(mongodb::bson::doc! {})
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_on_empty_store_creates_one_document() {
    let mongo = TestMongo::new().await;
    let service = SettingsService::new(MongoSettingsRepository::new(&mongo.database()));

    let first = service.get_settings().await.unwrap();
    let second = service.get_settings().await.unwrap();

    assert_eq!(first.id, SETTINGS_ID);
    assert_eq!(second, first);
    assert_eq!(first.hero_title, DEFAULT_HERO_TITLE);
    assert_eq!(settings_count(&mongo).await, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_on_empty_store_fills_defaults() {
    let mongo = TestMongo::new().await;
    let repo = MongoSettingsRepository::new(&mongo.database());

    let settings = repo
        .upsert(UpdateSettings {
            hero_title: Some("Nuevo".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(settings.id, SETTINGS_ID);
    assert_eq!(settings.hero_title, "Nuevo");
    assert_eq!(settings.address, DEFAULT_ADDRESS);
    assert_eq!(settings_count(&mongo).await, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_every_field_on_empty_store() {
    let mongo = TestMongo::new().await;
    let repo = MongoSettingsRepository::new(&mongo.database());

    let settings = repo
        .upsert(UpdateSettings {
            hero_image_url: Some("https://cdn.example.com/hero.jpg".to_string()),
            whatsapp_number: Some("5550001111".to_string()),
            hero_title: Some("Titulo".to_string()),
            hero_subtitle: Some("Subtitulo".to_string()),
            address: Some("Av. Siempre Viva 742".to_string()),
            email: Some("hola@example.com".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(settings.whatsapp_number, "5550001111");
    assert_eq!(settings.email, "hola@example.com");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_upsert_updates_existing_document_in_place() {
    let mongo = TestMongo::new().await;
    let repo = MongoSettingsRepository::new(&mongo.database());

    repo.insert_defaults().await.unwrap();
    let updated = repo
        .upsert(UpdateSettings {
            address: Some("Av. Siempre Viva 742".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.address, "Av. Siempre Viva 742");
    assert_eq!(updated.hero_title, DEFAULT_HERO_TITLE);
    assert_eq!(repo.find().await.unwrap(), Some(updated));
    assert_eq!(settings_count(&mongo).await, 1);
}
