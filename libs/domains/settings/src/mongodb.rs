//! MongoDB implementation of SettingsRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::{SettingsError, SettingsResult};
use crate::models::{SETTINGS_ID, SiteSettings, UpdateSettings};
use crate::repository::SettingsRepository;

const COLLECTION: &str = "settings";

#[derive(Clone)]
pub struct MongoSettingsRepository {
    collection: Collection<SiteSettings>,
}

impl MongoSettingsRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<SiteSettings>(COLLECTION),
        }
    }

    /// Fields present in the update, keyed by their stored names.
    fn set_document(input: &UpdateSettings) -> Document {
        let mut set = Document::new();

        if let Some(ref url) = input.hero_image_url {
            set.insert("hero_image_url", url.as_str());
        }
        if let Some(ref number) = input.whatsapp_number {
            set.insert("whatsapp_number", number.as_str());
        }
        if let Some(ref title) = input.hero_title {
            set.insert("hero_title", title.as_str());
        }
        if let Some(ref subtitle) = input.hero_subtitle {
            set.insert("hero_subtitle", subtitle.as_str());
        }
        if let Some(ref address) = input.address {
            set.insert("address", address.as_str());
        }
        if let Some(ref email) = input.email {
            set.insert("email", email.as_str());
        }

        set
    }

    /// Default values for every field not already named in `set`. The `_id`
    /// comes from the upsert filter.
    fn defaults_document(set: &Document) -> Document {
        let defaults = SiteSettings::default();
        let mut on_insert = doc! {
            "whatsapp_number": defaults.whatsapp_number,
            "hero_title": defaults.hero_title,
            "hero_subtitle": defaults.hero_subtitle,
            "address": defaults.address,
            "email": defaults.email,
        };
        if let Some(url) = defaults.hero_image_url {
            on_insert.insert("hero_image_url", url);
        }

        for key in set.keys() {
            on_insert.remove(key);
        }
        on_insert
    }

    async fn upsert_document(&self, update: Document) -> SettingsResult<SiteSettings> {
        self.collection
            .find_one_and_update(doc! { "_id": SETTINGS_ID }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                SettingsError::Database("settings upsert returned no document".to_string())
            })
    }
}

#[async_trait]
impl SettingsRepository for MongoSettingsRepository {
    #[instrument(skip(self))]
    async fn find(&self) -> SettingsResult<Option<SiteSettings>> {
        let settings = self.collection.find_one(doc! { "_id": SETTINGS_ID }).await?;
        Ok(settings)
    }

    #[instrument(skip(self))]
    async fn insert_defaults(&self) -> SettingsResult<SiteSettings> {
        let on_insert = Self::defaults_document(&Document::new());
        let settings = self
            .upsert_document(doc! { "$setOnInsert": on_insert })
            .await?;

        tracing::info!("Default settings ensured");
        Ok(settings)
    }

    #[instrument(skip(self, input))]
    async fn upsert(&self, input: UpdateSettings) -> SettingsResult<SiteSettings> {
        let set = Self::set_document(&input);
        let on_insert = Self::defaults_document(&set);

        let mut update = doc! { "$set": set };
        if !on_insert.is_empty() {
            update.insert("$setOnInsert", on_insert);
        }

        let settings = self.upsert_document(update).await?;
        tracing::info!("Settings updated");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_skip_fields_being_set() {
        let set = MongoSettingsRepository::set_document(&UpdateSettings {
            hero_title: Some("Nuevo".into()),
            email: Some("hola@example.com".into()),
            ..Default::default()
        });
        let on_insert = MongoSettingsRepository::defaults_document(&set);

        assert_eq!(set.len(), 2);
        assert!(!on_insert.contains_key("hero_title"));
        assert!(!on_insert.contains_key("email"));
        assert!(on_insert.contains_key("address"));
        assert!(on_insert.contains_key("hero_image_url"));
        assert!(!on_insert.contains_key("_id"));
    }

    #[test]
    fn test_defaults_cover_every_field_when_nothing_is_set() {
        let on_insert = MongoSettingsRepository::defaults_document(&Document::new());
        assert_eq!(on_insert.len(), 6);
    }
}
