//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use database::mongodb::{duplicate_key_message, ensure_unique_index};
use mongodb::{Collection, Database};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

const COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(COLLECTION),
        }
    }

    /// Create the unique indexes on `username` and `email`. Idempotent.
    pub async fn init_indexes(&self) -> UserResult<()> {
        ensure_unique_index(&self.collection, "username").await?;
        ensure_unique_index(&self.collection, "email").await?;
        Ok(())
    }
}

/// Which unique field a duplicate-key message refers to, read from the
/// violated index name (`index: username_1`). `username` is checked first;
/// anything else is attributed to `email`.
fn duplicate_field(message: &str) -> &'static str {
    if message.contains("index: username_1 ") {
        "username"
    } else {
        "email"
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: User) -> UserResult<User> {
        if let Err(err) = self.collection.insert_one(&user).await {
            return Err(match duplicate_key_message(&err) {
                Some(message) => UserError::Duplicate(duplicate_field(message)),
                None => err.into(),
            });
        }

        tracing::info!(user_id = %user.id, "Admin user created");
        Ok(user)
    }
}
