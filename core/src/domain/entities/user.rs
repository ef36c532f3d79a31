//! User entity representing a registered account in Postline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The password hash travels with the entity only when it was explicitly
/// selected (sign-in path); default reads carry `None`. Serialization always
/// skips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique case-insensitively
    pub email: String,

    /// Bcrypt hash of the password; only populated by credential reads
    #[serde(skip)]
    pub password_hash: Option<String>,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Optional avatar URL
    pub avatar: Option<String>,

    /// Optional age
    pub age: Option<i32>,

    /// Optional city
    pub city: Option<String>,

    /// Optional biography
    pub bio: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a freshly hashed password
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into().to_lowercase(),
            password_hash: Some(password_hash.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            avatar: None,
            age: None,
            city: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a profile update, bumping `updated_at`
    pub fn apply_profile_update(&mut self, update: ProfileUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(city) = update.city {
            self.city = Some(city);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        self.updated_at = Utc::now();
    }

    /// Returns the entity without its password hash
    pub fn without_password(mut self) -> Self {
        self.password_hash = None;
        self
    }
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub age: Option<i32>,
    pub city: Option<String>,
    pub bio: Option<String>,
}
