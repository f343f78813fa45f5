//! Canonical share model.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use cloudshare_core::AppError;

use super::permissions::SharePermissions;

/// Type of share, carried on the wire as a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareType {
    /// A share directly with another user.
    User,
    /// A share with a group.
    Group,
    /// A share via public link.
    Link,
    /// A federated share with a user on another instance.
    Remote,
}

impl ShareType {
    /// The numeric code used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::Link => 3,
            Self::Remote => 6,
        }
    }

    /// Decode a wire code. Unknown codes yield `None`.
    pub fn from_wire(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::User),
            1 => Some(Self::Group),
            3 => Some(Self::Link),
            6 => Some(Self::Remote),
            _ => None,
        }
    }

    /// Return the share type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Link => "link",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for ShareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShareType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "group" => Ok(Self::Group),
            "link" => Ok(Self::Link),
            "remote" => Ok(Self::Remote),
            _ => Err(AppError::validation(format!(
                "Invalid share type: '{s}'. Expected one of: user, group, link, remote"
            ))),
        }
    }
}

impl Serialize for ShareType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ShareType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::from_wire(code)
            .ok_or_else(|| D::Error::custom(format!("unknown share type code {code}")))
    }
}

/// The canonical form of a share.
///
/// Instances are ephemeral: one is built per API response by
/// [`Share::parse`](crate::share::model::Share::parse) and per outgoing
/// request by the client. Only canonical field names exist here; the raw
/// wire keys (`share_with`, `item_source`, `item_type`, `expiration`) are
/// translated at parse time and never carried forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Share identifier. Absent for a share that has not been persisted
    /// yet, which posts to the collection URL instead of its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Type of share. `None` when the wire carried no (or an unknown) code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_type: Option<ShareType>,
    /// Recipient user or group. Always absent for link shares, whose
    /// recipient field holds the password instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_with: Option<String>,
    /// Link password, populated from the wire recipient field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Backend identifier of the shared item.
    #[serde(
        default,
        rename = "itemSource",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_source: Option<String>,
    /// Type of the shared item (`"file"` or `"folder"`).
    #[serde(default, rename = "itemType", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Expiration date. Always serialized: `null` is the explicit
    /// "no expiration" marker, the key is never absent.
    #[serde(default, rename = "expireDate")]
    pub expire_date: Option<String>,
    /// Granted permission bits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<SharePermissions>,
    /// Opaque token identifying a public link share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Pre-computed absolute link for link shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Display name of a link share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Share {
    /// Whether this is a public link share.
    pub fn is_link(&self) -> bool {
        self.share_type == Some(ShareType::Link)
    }

    /// Whether the share has been persisted (has an identifier).
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Whether the share grants the CREATE permission bit.
    pub fn can_create(&self) -> bool {
        self.permissions.is_some_and(SharePermissions::can_create)
    }

    /// The absolute public link for this share.
    ///
    /// Returns the pre-computed `url` when the server supplied one,
    /// otherwise synthesizes `<webroot>/s/<token>`. The token is not
    /// validated: a share with neither url nor token yields a link with
    /// an empty trailing segment.
    pub fn public_link(&self, webroot: &str) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        format!(
            "{}/s/{}",
            webroot.trim_end_matches('/'),
            self.token.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_share() -> Share {
        Share {
            id: Some("7".to_string()),
            share_type: Some(ShareType::Link),
            share_with: None,
            password: None,
            item_source: Some("132".to_string()),
            item_type: Some("file".to_string()),
            expire_date: None,
            permissions: Some(SharePermissions::READ),
            token: Some("fI2cNRhOyDyh1VG".to_string()),
            url: None,
            name: None,
        }
    }

    #[test]
    fn test_public_link_prefers_precomputed_url() {
        let mut share = link_share();
        share.url = Some("https://cloud.example.com/s/abc".to_string());
        assert_eq!(
            share.public_link("https://ignored.example.com"),
            "https://cloud.example.com/s/abc"
        );
    }

    #[test]
    fn test_public_link_synthesized_from_token() {
        let share = link_share();
        assert_eq!(
            share.public_link("https://cloud.example.com/"),
            "https://cloud.example.com/s/fI2cNRhOyDyh1VG"
        );
    }

    #[test]
    fn test_public_link_with_missing_token_has_empty_segment() {
        let mut share = link_share();
        share.token = None;
        assert_eq!(
            share.public_link("https://cloud.example.com"),
            "https://cloud.example.com/s/"
        );
    }

    #[test]
    fn test_share_type_wire_codes_round_trip() {
        for ty in [
            ShareType::User,
            ShareType::Group,
            ShareType::Link,
            ShareType::Remote,
        ] {
            assert_eq!(ShareType::from_wire(ty.code()), Some(ty));
        }
        assert_eq!(ShareType::from_wire(42), None);
    }

    #[test]
    fn test_share_type_parses_from_name() {
        assert_eq!("link".parse::<ShareType>().expect("parse"), ShareType::Link);
        assert!("mailto".parse::<ShareType>().is_err());
    }
}
