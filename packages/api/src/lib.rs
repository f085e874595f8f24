//! # API crate — shared fullstack server functions for CatmanAI
//!
//! This crate is the backbone of the CatmanAI fullstack architecture. It defines every
//! Dioxus server function the web frontend calls, along with the supporting modules
//! they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Google OAuth and local password authentication, session key, password hashing |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models and their client-safe projections |
//!
//! ## Server functions
//!
//! The public `async fn`s below are Dioxus server functions. Each carries a
//! `#[get(...)]` or `#[post(...)]` attribute and exists in two compilations: the
//! real handler under `#[cfg(feature = "server")]`, and a client-side stub that
//! turns the call into an HTTP request to that route.
//!
//! - **Authentication**: `get_session`, `sign_in`, `sign_up`, `get_login_url`,
//!   `sign_out`, `list_my_roles`
//! - **Member content**: `list_sections`, `list_section_items`
//! - **Admin**: `list_users`, `update_user_role`, `list_sections_admin`,
//!   `create_section`, `update_section`, `delete_section`, `set_section_secret`,
//!   `create_item`, `update_item`, `delete_item`
//!
//! Admin functions enforce the `admin` role server-side on every call; the client's
//! route guard is a convenience, not the boundary.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::{
    effective_role, AdminSection, AdminUser, CurrentSession, ItemInfo, SectionInfo, SessionInfo,
    UserInfo, UserRole,
};

/// Resolve the session cookie's user id, or fail with "Not authenticated".
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))
}

/// Like [`require_user`], but additionally demands an `admin` role row.
#[cfg(feature = "server")]
async fn require_admin(
    session: &tower_sessions::Session,
) -> Result<uuid::Uuid, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user(session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 as n FROM user_roles WHERE user_id = $1 AND role = 'admin'",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if row.is_none() {
        return Err(ServerFnError::new("Admin access required"));
    }

    Ok(user_id)
}

/// One-shot check of the current session. `None` when not signed in.
#[cfg(feature = "server")]
#[get("/api/auth/session", session: tower_sessions::Session)]
pub async fn get_session() -> Result<Option<CurrentSession>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // A cookie for a deleted user is the same as no session
    let Some(user) = user else {
        return Ok(None);
    };

    Ok(Some(CurrentSession {
        user: user.to_info(),
        session: SessionInfo {
            user_id,
            expires_at: session.expiry_date().unix_timestamp(),
        },
    }))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/session")]
pub async fn get_session() -> Result<Option<CurrentSession>, ServerFnError> {
    Ok(None)
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/sign-in", session: tower_sessions::Session)]
pub async fn sign_in(email: String, password: String) -> Result<CurrentSession, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as(
        "SELECT * FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(CurrentSession {
        user: user.to_info(),
        session: SessionInfo {
            user_id: user.id.to_string(),
            expires_at: session.expiry_date().unix_timestamp(),
        },
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-in")]
pub async fn sign_in(email: String, password: String) -> Result<CurrentSession, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new account with email and password.
///
/// Creates the `users` row, its `profiles` mirror and a `member` role row.
/// Deliberately does NOT create a session: the account still has to be
/// confirmed by email, so the UI sends the user back to the sign-in tab.
/// `email_redirect_to` is the address the confirmation mail should link back
/// to; the mail path is not wired up in development, so it is logged instead.
#[cfg(feature = "server")]
#[post("/api/auth/sign-up")]
pub async fn sign_up(
    email: String,
    password: String,
    display_name: Option<String>,
    email_redirect_to: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();
    let display_name = display_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 6 {
        return Err(ServerFnError::new("Password must be at least 6 characters"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Local accounts key on (provider = 'local', provider_id = email).
    let existing: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 as n FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, name, provider, provider_id, password_hash) VALUES ($1, $2, 'local', $1, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&display_name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO profiles (id, email, display_name) VALUES ($1, $2, $3)")
        .bind(user.id)
        .bind(&user.email)
        .bind(&display_name)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO user_roles (user_id, role) VALUES ($1, 'member') ON CONFLICT (user_id, role) DO NOTHING",
    )
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        "Confirmation mail for {} would link back to {}",
        user.email,
        email_redirect_to
    );

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-up")]
pub async fn sign_up(
    email: String,
    password: String,
    display_name: Option<String>,
    email_redirect_to: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Start an OAuth flow: returns the provider's consent-screen URL to redirect to.
/// Only `"google"` is wired up.
#[cfg(feature = "server")]
#[get("/api/auth/login/:provider")]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    match provider.as_str() {
        "google" => {
            let oauth = auth::GoogleOAuth::new().map_err(|e| ServerFnError::new(e))?;
            let (url, _, _) = oauth
                .generate_auth_url()
                .await
                .map_err(|e| ServerFnError::new(e))?;
            Ok(url)
        }
        _ => Err(ServerFnError::new(format!("Unknown provider: {}", provider))),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login/:provider")]
pub async fn get_login_url(provider: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

/// Role assignment rows for the session user, for the client-side role
/// reduction ([`effective_role`]).
#[cfg(feature = "server")]
#[get("/api/auth/roles", session: tower_sessions::Session)]
pub async fn list_my_roles() -> Result<Vec<UserRole>, ServerFnError> {
    use crate::db::get_pool;

    let user_id = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(UserRole,)> = sqlx::query_as("SELECT role FROM user_roles WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(|(role,)| role).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/roles")]
pub async fn list_my_roles() -> Result<Vec<UserRole>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The one place members read sections from. Hidden rows never leave
/// the database.
#[cfg(feature = "server")]
async fn fetch_visible_sections(
    pool: &sqlx::PgPool,
) -> Result<Vec<crate::models::ContentSection>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM content_sections WHERE is_visible = TRUE ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Visible sections for the member dashboard, ordered by name.
#[cfg(feature = "server")]
#[get("/api/content/sections", session: tower_sessions::Session)]
pub async fn list_sections() -> Result<Vec<SectionInfo>, ServerFnError> {
    use crate::db::get_pool;

    require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sections = fetch_visible_sections(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(sections.iter().map(|s| s.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/content/sections")]
pub async fn list_sections() -> Result<Vec<SectionInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Items of one section, ordered by `order_index` ascending.
#[cfg(feature = "server")]
#[get("/api/content/sections/:section_id/items", session: tower_sessions::Session)]
pub async fn list_section_items(section_id: String) -> Result<Vec<ItemInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ContentItem;

    require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section_uuid = uuid::Uuid::parse_str(&section_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let items: Vec<ContentItem> = sqlx::query_as(
        "SELECT * FROM content_items WHERE section_id = $1 ORDER BY order_index",
    )
    .bind(section_uuid)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(items.iter().map(|i| i.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/content/sections/:section_id/items")]
pub async fn list_section_items(section_id: String) -> Result<Vec<ItemInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All users with their reduced role, newest first. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/users", session: tower_sessions::Session)]
pub async fn list_users() -> Result<Vec<AdminUser>, ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(
        uuid::Uuid,
        String,
        Option<String>,
        chrono::DateTime<chrono::Utc>,
        Option<bool>,
    )> = sqlx::query_as(
        r#"
        SELECT p.id, p.email, p.display_name, p.created_at,
               BOOL_OR(r.role = 'admin') AS is_admin
        FROM profiles p
        JOIN user_roles r ON r.user_id = p.id
        GROUP BY p.id, p.email, p.display_name, p.created_at
        ORDER BY p.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, email, display_name, created_at, is_admin)| AdminUser {
            id: id.to_string(),
            email,
            display_name,
            role: if is_admin.unwrap_or(false) {
                UserRole::Admin
            } else {
                UserRole::Member
            },
            created_at: created_at.to_rfc3339(),
        })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users")]
pub async fn list_users() -> Result<Vec<AdminUser>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Rewrite a user's role rows to the given role. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/update-role", session: tower_sessions::Session)]
pub async fn update_user_role(user_id: String, role: UserRole) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE user_roles SET role = $2 WHERE user_id = $1")
        .bind(user_uuid)
        .bind(role)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/update-role")]
pub async fn update_user_role(user_id: String, role: UserRole) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All sections with their item counts, newest first. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/sections", session: tower_sessions::Session)]
pub async fn list_sections_admin() -> Result<Vec<AdminSection>, ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(uuid::Uuid, String, bool, chrono::DateTime<chrono::Utc>, i64)> =
        sqlx::query_as(
            r#"
            SELECT s.id, s.name, s.is_visible, s.created_at, COUNT(i.id) AS items_count
            FROM content_sections s
            LEFT JOIN content_items i ON i.section_id = s.id
            GROUP BY s.id, s.name, s.is_visible, s.created_at
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, name, is_visible, created_at, items_count)| AdminSection {
            id: id.to_string(),
            name,
            is_visible,
            items_count,
            created_at: created_at.to_rfc3339(),
        })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/sections")]
pub async fn list_sections_admin() -> Result<Vec<AdminSection>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a section. Returns the new row so the caller can attach a secret.
#[cfg(feature = "server")]
#[post("/api/admin/create-section", session: tower_sessions::Session)]
pub async fn create_section(name: String, is_visible: bool) -> Result<SectionInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ContentSection;

    require_admin(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Section name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section: ContentSection = sqlx::query_as(
        "INSERT INTO content_sections (name, is_visible) VALUES ($1, $2) RETURNING *",
    )
    .bind(&name)
    .bind(is_visible)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(section.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/create-section")]
pub async fn create_section(name: String, is_visible: bool) -> Result<SectionInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Rename a section or toggle its visibility. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/update-section", session: tower_sessions::Session)]
pub async fn update_section(
    id: String,
    name: String,
    is_visible: bool,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Section name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE content_sections SET name = $2, is_visible = $3, updated_at = NOW() WHERE id = $1",
    )
    .bind(section_uuid)
    .bind(&name)
    .bind(is_visible)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/update-section")]
pub async fn update_section(
    id: String,
    name: String,
    is_visible: bool,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a section; its items and secret go with it (FK cascade).
#[cfg(feature = "server")]
#[post("/api/admin/delete-section", session: tower_sessions::Session)]
pub async fn delete_section(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section_uuid =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM content_sections WHERE id = $1")
        .bind(section_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/delete-section")]
pub async fn delete_section(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set or replace a section's unlock password. Admin only.
///
/// The row is reference data for operators; the member-facing unlock gate
/// checks its own fixed list and never reads this table.
#[cfg(feature = "server")]
#[post("/api/admin/section-secret", session: tower_sessions::Session)]
pub async fn set_section_secret(section_id: String, password: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    if password.trim().is_empty() {
        return Err(ServerFnError::new("Password is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section_uuid = uuid::Uuid::parse_str(&section_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO content_section_secrets (section_id, password)
        VALUES ($1, $2)
        ON CONFLICT (section_id)
        DO UPDATE SET password = EXCLUDED.password, updated_at = NOW()
        "#,
    )
    .bind(section_uuid)
    .bind(&password)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/section-secret")]
pub async fn set_section_secret(section_id: String, password: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an item inside a section. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/create-item", session: tower_sessions::Session)]
pub async fn create_item(
    section_id: String,
    title: String,
    description: Option<String>,
    url: String,
    order_index: i32,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let title = title.trim().to_string();
    let url = url.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if url.is_empty() {
        return Err(ServerFnError::new("URL is required"));
    }
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let section_uuid = uuid::Uuid::parse_str(&section_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO content_items (section_id, title, description, url, order_index) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(section_uuid)
    .bind(&title)
    .bind(&description)
    .bind(&url)
    .bind(order_index)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/create-item")]
pub async fn create_item(
    section_id: String,
    title: String,
    description: Option<String>,
    url: String,
    order_index: i32,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update an item's title, description and URL. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/update-item", session: tower_sessions::Session)]
pub async fn update_item(
    id: String,
    title: String,
    description: Option<String>,
    url: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let title = title.trim().to_string();
    let url = url.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if url.is_empty() {
        return Err(ServerFnError::new("URL is required"));
    }
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let item_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE content_items SET title = $2, description = $3, url = $4, updated_at = NOW() WHERE id = $1",
    )
    .bind(item_uuid)
    .bind(&title)
    .bind(&description)
    .bind(&url)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/update-item")]
pub async fn update_item(
    id: String,
    title: String,
    description: Option<String>,
    url: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an item. Admin only.
#[cfg(feature = "server")]
#[post("/api/admin/delete-item", session: tower_sessions::Session)]
pub async fn delete_item(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let item_uuid = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM content_items WHERE id = $1")
        .bind(item_uuid)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/delete-item")]
pub async fn delete_item(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use sqlx::PgPool;

    #[sqlx::test]
    async fn hidden_sections_stay_out_of_the_member_list(pool: PgPool) {
        sqlx::query(
            "INSERT INTO content_sections (name, is_visible) VALUES ($1, TRUE), ($2, FALSE)",
        )
        .bind("公開專區")
        .bind("隱藏專區")
        .execute(&pool)
        .await
        .unwrap();

        let sections = super::fetch_visible_sections(&pool).await.unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "公開專區");
        assert!(sections[0].is_visible);
    }
}
