//! Client-safe session projections.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Read-only view of the server session cookie's state.
///
/// Creation, refresh and expiry are owned by the session layer; the client
/// only ever holds this projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionInfo {
    pub user_id: String,
    /// Unix timestamp of the session's current expiry.
    pub expires_at: i64,
}

/// The authenticated user together with their session, as returned by the
/// session check and password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentSession {
    pub user: UserInfo,
    pub session: SessionInfo,
}
