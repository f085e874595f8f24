//! # Content models — sections and the items inside them
//!
//! A **section** is a named, independently visible grouping of content; an
//! **item** is a single titled link belonging to exactly one section, ordered
//! by `order_index` ascending.
//!
//! Like the user model, each table row type ([`ContentSection`],
//! [`ContentItem`]) is server-only and projects into a client-safe `*Info`
//! struct with string ids. [`AdminUser`] and [`AdminSection`] are the wider
//! projections consumed by the admin panel (role, item count, creation date).

use serde::{Deserialize, Serialize};

use super::UserRole;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full section row from the `content_sections` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ContentSection {
    pub id: Uuid,
    pub name: String,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ContentSection {
    pub fn to_info(&self) -> SectionInfo {
        SectionInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            is_visible: self.is_visible,
        }
    }
}

/// Full item row from the `content_items` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ContentItem {
    pub id: Uuid,
    pub section_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ContentItem {
    pub fn to_info(&self) -> ItemInfo {
        ItemInfo {
            id: self.id.to_string(),
            section_id: self.section_id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            order_index: self.order_index,
        }
    }
}

/// Section fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionInfo {
    pub id: String,
    pub name: String,
    pub is_visible: bool,
}

/// Item fields safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemInfo {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub order_index: i32,
}

/// One row of the admin panel's user table: profile joined with the reduced
/// role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: UserRole,
    /// RFC 3339 creation timestamp; the UI renders the date part.
    pub created_at: String,
}

/// One row of the admin panel's section list, with its item count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSection {
    pub id: String,
    pub name: String,
    pub is_visible: bool,
    pub items_count: i64,
    pub created_at: String,
}
