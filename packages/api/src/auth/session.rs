//! Server session constants.

/// Key under which the authenticated user's id is stored in the session.
///
/// Written by password sign-in and the OAuth callback, cleared by sign-out's
/// session flush. Everything else about the session (cookie, store row,
/// expiry) is owned by the `tower_sessions` layer.
pub const SESSION_USER_ID_KEY: &str = "user_id";
