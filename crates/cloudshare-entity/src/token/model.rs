//! Authentication token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted authentication token.
///
/// Tokens are issued per device or app and identified to the user by a
/// display name. The `name` column is nullable in the historical schema;
/// rows predating the name-backfill migration may carry `NULL` or `""`,
/// which [`AuthToken::display_name`] papers over.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthToken {
    /// Unique token identifier.
    pub id: Uuid,
    /// The user this token belongs to.
    pub user_id: Uuid,
    /// Login name the token was issued under.
    pub login_name: String,
    /// Human-readable display name shown in security settings.
    pub name: Option<String>,
    /// SHA-256 hash of the token secret.
    #[serde(skip_serializing)]
    pub token_hash: String,
    /// Last time the token was used.
    pub last_activity: DateTime<Utc>,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    /// Placeholder display name for tokens issued without one.
    pub const DEFAULT_NAME: &'static str = "(none)";

    /// The display name, substituting the placeholder for blank names.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            None | Some("") => Self::DEFAULT_NAME,
            Some(name) => name,
        }
    }

    /// Whether this row violates the "name is never blank" invariant.
    pub fn has_blank_name(&self) -> bool {
        matches!(self.name.as_deref(), None | Some(""))
    }
}

/// Data required to persist a new authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuthToken {
    /// The user the token belongs to.
    pub user_id: Uuid,
    /// Login name the token is issued under.
    pub login_name: String,
    /// Display name; `None` falls back to the placeholder at insert time.
    pub name: Option<String>,
    /// SHA-256 hash of the token secret.
    pub token_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(name: Option<&str>) -> AuthToken {
        AuthToken {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            login_name: "alice".to_string(),
            name: name.map(String::from),
            token_hash: "deadbeef".to_string(),
            last_activity: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_substitutes_placeholder_for_blank() {
        assert_eq!(token(None).display_name(), AuthToken::DEFAULT_NAME);
        assert_eq!(token(Some("")).display_name(), AuthToken::DEFAULT_NAME);
        assert_eq!(token(Some("Work laptop")).display_name(), "Work laptop");
    }

    #[test]
    fn test_blank_name_detection() {
        assert!(token(None).has_blank_name());
        assert!(token(Some("")).has_blank_name());
        assert!(!token(Some("(none)")).has_blank_name());
        assert!(!token(Some("Phone")).has_blank_name());
    }
}
