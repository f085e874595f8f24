//! Role assignments and their reduction to an effective role.

use serde::{Deserialize, Serialize};

/// A role granted to a user via the `user_roles` table.
///
/// A user may hold several assignment rows; [`effective_role`] reduces them
/// to the single privilege level the UI acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(feature = "server", sqlx(type_name = "app_role", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Member => "member",
        }
    }

    /// Badge label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "管理員",
            UserRole::Member => "會員",
        }
    }
}

/// Reduce a user's role assignment rows to their effective role.
///
/// Any `admin` row wins; everything else, the empty set included, is `Member`.
/// The unauthenticated case (`None`) is handled by the caller, which never
/// queries roles without a session user.
pub fn effective_role(roles: &[UserRole]) -> UserRole {
    if roles.contains(&UserRole::Admin) {
        UserRole::Admin
    } else {
        UserRole::Member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_row_wins() {
        assert_eq!(effective_role(&[UserRole::Admin]), UserRole::Admin);
        assert_eq!(
            effective_role(&[UserRole::Member, UserRole::Admin]),
            UserRole::Admin
        );
        assert_eq!(
            effective_role(&[UserRole::Admin, UserRole::Member]),
            UserRole::Admin
        );
    }

    #[test]
    fn member_rows_reduce_to_member() {
        assert_eq!(effective_role(&[UserRole::Member]), UserRole::Member);
        assert_eq!(
            effective_role(&[UserRole::Member, UserRole::Member]),
            UserRole::Member
        );
    }

    #[test]
    fn empty_set_is_member() {
        assert_eq!(effective_role(&[]), UserRole::Member);
    }

    #[test]
    fn labels() {
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Member.as_str(), "member");
        assert_eq!(UserRole::Admin.label(), "管理員");
        assert_eq!(UserRole::Member.label(), "會員");
    }
}
