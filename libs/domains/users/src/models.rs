use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// User roles. Only administrators can be provisioned.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
}

/// User entity as stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the service
    pub hashed_password: String,
    pub role: Role,
}

/// DTO for provisioning an administrator
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAdmin {
    #[validate(length(min = 3, max = 50))]
    #[schema(example = "admin")]
    pub username: String,
    #[validate(email)]
    #[schema(example = "admin@recuerdoseternos.com")]
    pub email: String,
    #[validate(length(min = 8))]
    #[schema(example = "s3cure-pass", min_length = 8)]
    pub password: String,
}

/// User response DTO (without the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "665f1c2ab2d4e1a9c0f3b7aa")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// A new administrator with an already-hashed password.
    pub fn new_admin(username: String, email: String, hashed_password: String) -> Self {
        Self {
            id: ObjectId::new(),
            username,
            email,
            hashed_password,
            role: Role::Admin,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn test_create_admin_validation() {
        let valid = CreateAdmin {
            username: "admin".into(),
            email: "admin@example.com".into(),
            password: "long-enough".into(),
        };
        assert!(valid.validate().is_ok());

        let short_name = CreateAdmin {
            username: "ab".into(),
            ..valid.clone()
        };
        assert!(short_name.validate().is_err());

        let long_name = CreateAdmin {
            username: "x".repeat(51),
            ..valid.clone()
        };
        assert!(long_name.validate().is_err());

        let bad_email = CreateAdmin {
            email: "not-an-email".into(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = CreateAdmin {
            password: "1234567".into(),
            ..valid
        };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_response_omits_hash() {
        let user = User::new_admin("admin".into(), "a@b.co".into(), "$argon2id$...".into());
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(value.get("hashed_password").is_none());
        assert_eq!(value["role"], "admin");
        assert_eq!(value["id"].as_str().unwrap().len(), 24);
    }
}
