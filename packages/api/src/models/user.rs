//! # User model — the authentication identity
//!
//! [`User`] is the full `users` row and exists only on the server: it carries
//! the provider linkage (`provider` is `"google"` or `"local"`, with
//! `provider_id` holding the Google account id or the email respectively) and
//! the Argon2 `password_hash` for local accounts. [`User::to_info`] projects
//! it into [`UserInfo`], the subset that crosses the server function boundary:
//! string id for WASM, no hash, no provider internals, no timestamps.
//!
//! App-facing profile data (the admin panel's user list) lives in the
//! `profiles` mirror, not here; see [`super::content::AdminUser`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Complete `users` row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider: String,
    pub provider_id: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

/// User fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
