use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::SYSTEM_ACTOR;

/// Identity resolved from a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role_level: i32,
}

impl AuthenticatedUser {
    /// Check if user meets a minimum role level
    pub fn has_role_level(&self, min_level: i32) -> bool {
        self.role_level >= min_level
    }

    /// Identifier written to `created_by` / `updated_by`
    pub fn actor(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(SYSTEM_ACTOR)
    }
}

/// Claims carried by access tokens issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub role_level: i32,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            role_level: claims.role_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, role_level: i32) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "42".to_string(),
            username: username.map(String::from),
            role_level,
        }
    }

    #[test]
    fn test_actor_prefers_username() {
        assert_eq!(user(Some("alice"), 10).actor(), "alice");
    }

    #[test]
    fn test_actor_falls_back_to_system() {
        assert_eq!(user(None, 10).actor(), "system");
        assert_eq!(user(Some("  "), 10).actor(), "system");
    }

    #[test]
    fn test_role_level_threshold_is_inclusive() {
        assert!(user(None, 10).has_role_level(10));
        assert!(user(None, 50).has_role_level(10));
        assert!(!user(None, 9).has_role_level(10));
    }
}
