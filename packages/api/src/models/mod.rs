//! Domain types: users, roles, sessions, and the content catalog.
//!
//! Server-only row structs stay behind the `server` feature; the `*Info`
//! projections are shared with the client.

mod content;
mod role;
mod session;
mod user;

#[cfg(feature = "server")]
pub use content::{ContentItem, ContentSection};
pub use content::{AdminSection, AdminUser, ItemInfo, SectionInfo};
pub use role::{effective_role, UserRole};
pub use session::{CurrentSession, SessionInfo};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
