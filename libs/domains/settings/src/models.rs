use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Well-known `_id` of the single settings document.
pub const SETTINGS_ID: &str = "site";

pub const DEFAULT_HERO_IMAGE_URL: &str = "https://placehold.co/1920x1080";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "1234567890";
pub const DEFAULT_HERO_TITLE: &str = "Honrando su Memoria con Amor";
pub const DEFAULT_HERO_SUBTITLE: &str =
    "Encuentra la ánfora perfecta para atesorar el recuerdo de tu fiel compañero.";
pub const DEFAULT_ADDRESS: &str = "123 Calle Falsa, Ciudad";
pub const DEFAULT_EMAIL: &str = "info@recuerdoseternos.com";

/// Storefront settings as stored in the `settings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    pub whatsapp_number: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub address: String,
    pub email: String,
}

/// Settings as returned to the storefront client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    #[schema(example = "site")]
    pub id: String,
    #[schema(example = "https://placehold.co/1920x1080")]
    pub hero_image_url: Option<String>,
    #[schema(example = "1234567890")]
    pub whatsapp_number: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub address: String,
    #[schema(example = "info@recuerdoseternos.com")]
    pub email: String,
}

/// DTO for partially updating the settings.
///
/// Absent and `null` fields are both left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[validate(url)]
    pub hero_image_url: Option<String>,
    #[validate(length(min = 1))]
    pub whatsapp_number: Option<String>,
    #[validate(length(min = 1))]
    pub hero_title: Option<String>,
    #[validate(length(min = 1))]
    pub hero_subtitle: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: SETTINGS_ID.to_string(),
            hero_image_url: Some(DEFAULT_HERO_IMAGE_URL.to_string()),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            hero_title: DEFAULT_HERO_TITLE.to_string(),
            hero_subtitle: DEFAULT_HERO_SUBTITLE.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Apply updates from UpdateSettings DTO
    pub fn apply_update(&mut self, update: UpdateSettings) {
        if let Some(url) = update.hero_image_url {
            self.hero_image_url = Some(url);
        }
        if let Some(number) = update.whatsapp_number {
            self.whatsapp_number = number;
        }
        if let Some(title) = update.hero_title {
            self.hero_title = title;
        }
        if let Some(subtitle) = update.hero_subtitle {
            self.hero_subtitle = subtitle;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

impl UpdateSettings {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.hero_image_url.is_none()
            && self.whatsapp_number.is_none()
            && self.hero_title.is_none()
            && self.hero_subtitle.is_none()
            && self.address.is_none()
            && self.email.is_none()
    }
}

impl From<SiteSettings> for SettingsResponse {
    fn from(settings: SiteSettings) -> Self {
        Self {
            id: settings.id,
            hero_image_url: settings.hero_image_url,
            whatsapp_number: settings.whatsapp_number,
            hero_title: settings.hero_title,
            hero_subtitle: settings.hero_subtitle,
            address: settings.address,
            email: settings.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_is_camel_case() {
        let value = serde_json::to_value(SettingsResponse::from(SiteSettings::default())).unwrap();

        assert_eq!(value["id"], "site");
        assert_eq!(value["heroTitle"], DEFAULT_HERO_TITLE);
        assert_eq!(value["whatsappNumber"], DEFAULT_WHATSAPP_NUMBER);
        assert_eq!(value["heroImageUrl"], DEFAULT_HERO_IMAGE_URL);
        assert!(value.get("hero_title").is_none());
    }

    #[test]
    fn test_update_reads_camel_case_and_ignores_nulls() {
        let update: UpdateSettings =
            serde_json::from_value(json!({"heroTitle": "Nuevo", "address": null})).unwrap();

        assert_eq!(update.hero_title.as_deref(), Some("Nuevo"));
        assert!(update.address.is_none());
        assert!(!update.is_empty());

        let empty: UpdateSettings = serde_json::from_value(json!({"email": null})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_validation() {
        let bad_email = UpdateSettings {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(bad_email.validate().is_err());

        let bad_url = UpdateSettings {
            hero_image_url: Some("hero.jpg".into()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let blank_address = UpdateSettings {
            address: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_address.validate().is_err());
    }

    #[test]
    fn test_required_text_fields_cannot_be_blanked() {
        let blank: UpdateSettings = serde_json::from_value(json!({
            "whatsappNumber": "",
            "heroTitle": "",
            "heroSubtitle": ""
        }))
        .unwrap();

        let errors = blank.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["whatsapp_number", "hero_title", "hero_subtitle"] {
            assert!(fields.contains_key(field), "{field} accepted an empty value");
        }
    }

    #[test]
    fn test_apply_update_keeps_other_fields() {
        let mut settings = SiteSettings::default();
        settings.apply_update(UpdateSettings {
            whatsapp_number: Some("5550001111".into()),
            ..Default::default()
        });

        assert_eq!(settings.whatsapp_number, "5550001111");
        assert_eq!(settings.hero_title, DEFAULT_HERO_TITLE);
        assert_eq!(settings.id, SETTINGS_ID);
    }
}
