//! # Signed-in user
//!
//! [`UserInfo`] is the body of `GET /api/users/me`. The client only relies on
//! `id`, `username` and `role`; the remaining profile fields are kept so the
//! account menu can show them when present.
//!
//! [`Role`] mirrors the backend's role enumeration. Admins and moderators are
//! "staff": they see the management links hidden from everyone else.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Vip,
    User,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Admins and moderators.
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Moderator)
    }
}

/// Current user as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to the username if no full name is set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_me_response() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":3,"email":"ana@example.com","username":"ana","role":"moderator",
                "is_active":true,"full_name":null,"phone":null,"two_factor_enabled":false}"#,
        )
        .unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::Moderator);
        assert!(user.role.is_staff());
        assert_eq!(user.display_name(), "ana");
    }

    #[test]
    fn test_unknown_role_is_not_staff() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":1,"username":"x","role":"auditor"}"#).unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert!(!user.role.is_staff());
        assert!(!Role::Vip.is_staff());
        assert!(Role::Admin.is_staff());
    }
}
