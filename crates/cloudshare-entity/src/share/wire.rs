//! Wire-format decoding for share API payloads.
//!
//! The share API answers either with a bare share object or with the
//! response envelope `{ "ocs": { "data": ... } }`. Both shapes use the
//! historical snake-styled keys (`share_with`, `item_source`, ...);
//! [`Share::parse`] translates them into the canonical form exactly once,
//! at the boundary. Absent keys never fail: every translation sub-step
//! that references a missing key is a no-op.

use serde::{Deserialize, Deserializer};

use super::model::{Share, ShareType};
use super::permissions::SharePermissions;

/// A share payload as received from the API, envelope and all.
///
/// Variant order matters: an object carrying `ocs.data` is an envelope;
/// anything else is treated as an already-flat share.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SharePayload {
    /// `{ "ocs": { "data": { ... } } }` response envelope.
    Enveloped { ocs: OcsEnvelope },
    /// Bare share object.
    Flat(RawShare),
}

impl SharePayload {
    /// Unwrap the envelope, if any.
    pub fn into_raw(self) -> RawShare {
        match self {
            Self::Enveloped { ocs } => ocs.data,
            Self::Flat(raw) => raw,
        }
    }
}

/// A share list payload, as returned by the collection endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShareListPayload {
    /// `{ "ocs": { "data": [ ... ] } }` response envelope.
    Enveloped { ocs: OcsListEnvelope },
    /// Bare array of shares.
    Flat(Vec<RawShare>),
}

impl ShareListPayload {
    /// Unwrap the envelope, if any.
    pub fn into_raw(self) -> Vec<RawShare> {
        match self {
            Self::Enveloped { ocs } => ocs.data,
            Self::Flat(raw) => raw,
        }
    }
}

/// The `ocs` member of an enveloped single-share response.
#[derive(Debug, Clone, Deserialize)]
pub struct OcsEnvelope {
    /// The enveloped share.
    pub data: RawShare,
}

/// The `ocs` member of an enveloped share-list response.
#[derive(Debug, Clone, Deserialize)]
pub struct OcsListEnvelope {
    /// The enveloped shares.
    pub data: Vec<RawShare>,
}

/// A share as it appears on the wire, before normalization.
///
/// Every field is optional; unrecognized keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShare {
    /// Identifier; servers deliver it as a string or a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// Numeric share type code.
    #[serde(default)]
    pub share_type: Option<i64>,
    /// Recipient, or the password for link shares.
    #[serde(default)]
    pub share_with: Option<String>,
    /// Password field; ignored for link shares in favor of `share_with`.
    #[serde(default)]
    pub password: Option<String>,
    /// Backend identifier of the shared item (string or number).
    #[serde(default, deserialize_with = "string_or_number")]
    pub item_source: Option<String>,
    /// Type of the shared item.
    #[serde(default)]
    pub item_type: Option<String>,
    /// Expiration under its historical wire name.
    #[serde(default)]
    pub expiration: Option<String>,
    /// Expiration under its canonical name; wins over `expiration`.
    #[serde(default, rename = "expireDate")]
    pub expire_date: Option<String>,
    /// Permission bits.
    #[serde(default)]
    pub permissions: Option<SharePermissions>,
    /// Public link token.
    #[serde(default)]
    pub token: Option<String>,
    /// Pre-computed absolute link.
    #[serde(default)]
    pub url: Option<String>,
    /// Display name of a link share.
    #[serde(default)]
    pub name: Option<String>,
}

impl Share {
    /// Normalize a wire payload into its canonical form.
    ///
    /// Pure and infallible: the only transformations are the envelope
    /// unwrap and the key translations described on [`Share::from_raw`].
    pub fn parse(payload: SharePayload) -> Self {
        Self::from_raw(payload.into_raw())
    }

    /// Normalize every share of a list payload.
    pub fn parse_list(payload: ShareListPayload) -> Vec<Self> {
        payload.into_raw().into_iter().map(Self::from_raw).collect()
    }

    /// Normalize a single unwrapped wire share.
    ///
    /// - For link shares the wire recipient field holds the password: it
    ///   moves to `password` (replacing any wire `password` value) and
    ///   `share_with` is left empty.
    /// - `item_source` / `item_type` become `itemSource` / `itemType`.
    /// - `expiration` is folded into `expire_date` unless the canonical
    ///   key already arrived; a losing wire value is discarded silently.
    ///   When neither key arrived, `expire_date` is an explicit `None`,
    ///   serialized as `null` rather than omitted.
    pub fn from_raw(raw: RawShare) -> Self {
        let share_type = raw.share_type.and_then(ShareType::from_wire);

        let is_link = raw.share_type == Some(ShareType::Link.code());
        let (share_with, password) = if is_link {
            (None, raw.share_with)
        } else {
            (raw.share_with, raw.password)
        };

        let expire_date = raw.expire_date.or(raw.expiration);

        Self {
            id: raw.id,
            share_type,
            share_with,
            password,
            item_source: raw.item_source,
            item_type: raw.item_type,
            expire_date,
            permissions: raw.permissions,
            token: raw.token,
            url: raw.url,
            name: raw.name,
        }
    }
}

/// Accept a JSON string or number, normalized to a string.
fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        String(String),
        Number(i64),
    }

    Ok(Option::<Value>::deserialize(deserializer)?.map(|v| match v {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Share {
        Share::parse(serde_json::from_value(value).expect("payload should decode"))
    }

    #[test]
    fn test_flat_payload_is_taken_as_is() {
        let share = parse(json!({
            "id": 42,
            "share_type": 0,
            "share_with": "alice",
            "permissions": 31,
        }));

        assert_eq!(share.id.as_deref(), Some("42"));
        assert_eq!(share.share_type, Some(ShareType::User));
        assert_eq!(share.share_with.as_deref(), Some("alice"));
        assert_eq!(share.permissions, Some(SharePermissions::ALL));
    }

    #[test]
    fn test_envelope_is_unwrapped_to_ocs_data() {
        let enveloped = parse(json!({
            "ocs": {
                "data": { "id": "42", "share_type": 0, "share_with": "alice" }
            }
        }));
        let flat = parse(json!({ "id": "42", "share_type": 0, "share_with": "alice" }));

        assert_eq!(enveloped, flat);
    }

    #[test]
    fn test_ocs_key_without_data_means_flat() {
        // an "ocs" member that is not a data envelope is just an unknown key
        let share = parse(json!({ "ocs": { "meta": { "status": "ok" } }, "id": "9" }));
        assert_eq!(share.id.as_deref(), Some("9"));
    }

    #[test]
    fn test_link_share_recipient_becomes_password() {
        let share = parse(json!({
            "share_type": 3,
            "share_with": "s3cret",
        }));

        assert_eq!(share.password.as_deref(), Some("s3cret"));
        assert_eq!(share.share_with, None);
    }

    #[test]
    fn test_link_share_recipient_replaces_wire_password() {
        let share = parse(json!({
            "share_type": 3,
            "share_with": "s3cret",
            "password": "stale",
        }));

        assert_eq!(share.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_user_share_keeps_recipient_and_password_apart() {
        let share = parse(json!({
            "share_type": 0,
            "share_with": "alice",
        }));

        assert_eq!(share.share_with.as_deref(), Some("alice"));
        assert_eq!(share.password, None);
    }

    #[test]
    fn test_item_keys_are_renamed_not_duplicated() {
        let share = parse(json!({
            "item_source": 132,
            "item_type": "folder",
        }));

        assert_eq!(share.item_source.as_deref(), Some("132"));
        assert_eq!(share.item_type.as_deref(), Some("folder"));

        let value = serde_json::to_value(&share).expect("serialize");
        assert_eq!(value["itemSource"], "132");
        assert_eq!(value["itemType"], "folder");
        assert!(value.get("item_source").is_none());
        assert!(value.get("item_type").is_none());
    }

    #[test]
    fn test_expiration_is_folded_into_expire_date() {
        let share = parse(json!({ "expiration": "2030-01-01" }));
        assert_eq!(share.expire_date.as_deref(), Some("2030-01-01"));

        let value = serde_json::to_value(&share).expect("serialize");
        assert!(value.get("expiration").is_none());
    }

    #[test]
    fn test_existing_expire_date_wins_silently() {
        let share = parse(json!({
            "expiration": "2030-01-01",
            "expireDate": "2029-06-15",
        }));

        assert_eq!(share.expire_date.as_deref(), Some("2029-06-15"));
    }

    #[test]
    fn test_missing_expiration_is_explicit_null() {
        let share = parse(json!({ "id": "1" }));
        assert_eq!(share.expire_date, None);

        // the key must be present with a null value, never omitted
        let value = serde_json::to_value(&share).expect("serialize");
        assert!(value.as_object().expect("object").contains_key("expireDate"));
        assert!(value["expireDate"].is_null());
    }

    #[test]
    fn test_empty_payload_degrades_gracefully() {
        let share = parse(json!({}));
        assert_eq!(share, Share::from_raw(RawShare::default()));
        assert!(!share.can_create());
    }

    #[test]
    fn test_unknown_share_type_code_is_dropped() {
        let share = parse(json!({ "share_type": 99, "share_with": "alice" }));
        assert_eq!(share.share_type, None);
        // only the link code moves the recipient into the password field
        assert_eq!(share.share_with.as_deref(), Some("alice"));
    }

    #[test]
    fn test_list_payload_normalizes_every_entry() {
        let payload: ShareListPayload = serde_json::from_value(json!({
            "ocs": { "data": [
                { "id": 1, "share_type": 3, "share_with": "pw" },
                { "id": 2, "share_type": 0, "share_with": "bob" },
            ]}
        }))
        .expect("payload should decode");

        let shares = Share::parse_list(payload);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].password.as_deref(), Some("pw"));
        assert_eq!(shares[1].share_with.as_deref(), Some("bob"));
    }
}
