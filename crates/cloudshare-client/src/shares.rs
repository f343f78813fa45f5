//! Share API operations.

use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use tracing::debug;

use cloudshare_core::error::{AppError, ErrorKind};
use cloudshare_core::result::AppResult;
use cloudshare_entity::share::{Share, ShareListPayload, SharePayload, SharePermissions, ShareType};

use crate::endpoint::share_url;
use crate::ApiClient;

/// Parameters for creating a share. Field names follow the wire schema.
#[derive(Debug, Clone, Serialize)]
pub struct CreateShareParams {
    /// Path of the file or folder to share.
    pub path: String,
    /// Type of share to create.
    pub share_type: ShareType,
    /// Recipient user or group; unused for link shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_with: Option<String>,
    /// Password for link shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Permission bits to grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<SharePermissions>,
    /// Expiration date.
    #[serde(rename = "expireDate", skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,
}

/// Parameters for updating a persisted share. The API accepts one field
/// per request; unset fields are simply not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateShareParams {
    /// New permission bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<SharePermissions>,
    /// New link password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New expiration date.
    #[serde(rename = "expireDate", skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ApiClient {
    /// Fetch a single share.
    pub async fn get_share(&self, id: &str) -> AppResult<Share> {
        let url = share_url(self.base_url(), Some(id));
        let response = self.request(Method::GET, &url).send().await.map_err(transport)?;
        let response = expect_success(response)?;
        let payload: SharePayload = response.json().await.map_err(decode)?;

        debug!(share_id = id, "Fetched share");
        Ok(Share::parse(payload))
    }

    /// List the current user's shares.
    pub async fn list_shares(&self) -> AppResult<Vec<Share>> {
        let url = share_url(self.base_url(), None);
        let response = self.request(Method::GET, &url).send().await.map_err(transport)?;
        let response = expect_success(response)?;
        let payload: ShareListPayload = response.json().await.map_err(decode)?;

        let shares = Share::parse_list(payload);
        debug!(count = shares.len(), "Listed shares");
        Ok(shares)
    }

    /// Create a new share. Posts to the collection URL: a share without
    /// an id has no sub-resource to address yet.
    pub async fn create_share(&self, params: &CreateShareParams) -> AppResult<Share> {
        let url = share_url(self.base_url(), None);
        let response = self
            .request(Method::POST, &url)
            .form(params)
            .send()
            .await
            .map_err(transport)?;
        let response = expect_success(response)?;
        let payload: SharePayload = response.json().await.map_err(decode)?;

        let share = Share::parse(payload);
        debug!(share_id = ?share.id, share_type = ?share.share_type, "Created share");
        Ok(share)
    }

    /// Update a persisted share.
    pub async fn update_share(&self, id: &str, params: &UpdateShareParams) -> AppResult<Share> {
        let url = share_url(self.base_url(), Some(id));
        let response = self
            .request(Method::PUT, &url)
            .form(params)
            .send()
            .await
            .map_err(transport)?;
        let response = expect_success(response)?;
        let payload: SharePayload = response.json().await.map_err(decode)?;

        debug!(share_id = id, "Updated share");
        Ok(Share::parse(payload))
    }

    /// Delete a share.
    pub async fn delete_share(&self, id: &str) -> AppResult<()> {
        let url = share_url(self.base_url(), Some(id));
        let response = self.request(Method::DELETE, &url).send().await.map_err(transport)?;
        expect_success(response)?;

        debug!(share_id = id, "Deleted share");
        Ok(())
    }

    /// The absolute public link for a share, using the configured webroot.
    pub fn public_link(&self, share: &Share) -> String {
        share.public_link(self.webroot())
    }
}

fn transport(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Share API request failed: {err}"),
        err,
    )
}

fn decode(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Serialization,
        format!("Failed to decode share API response: {err}"),
        err,
    )
}

fn expect_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::NOT_FOUND {
        Err(AppError::not_found("Share not found"))
    } else {
        Err(AppError::external_service(format!(
            "Share API returned HTTP {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_use_wire_key_names() {
        let params = CreateShareParams {
            path: "/Documents/plans.pdf".to_string(),
            share_type: ShareType::Link,
            share_with: None,
            password: Some("s3cret".to_string()),
            permissions: Some(SharePermissions::READ),
            expire_date: Some("2030-01-01".to_string()),
        };

        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["share_type"], 3);
        assert_eq!(value["expireDate"], "2030-01-01");
        assert_eq!(value["permissions"], 1);
        assert!(value.get("share_with").is_none());
    }

    #[test]
    fn test_update_params_skip_unset_fields() {
        let params = UpdateShareParams {
            permissions: Some(SharePermissions::READ | SharePermissions::CREATE),
            ..UpdateShareParams::default()
        };

        let value = serde_json::to_value(&params).expect("serialize");
        assert_eq!(value["permissions"], 5);
        assert!(value.get("password").is_none());
        assert!(value.get("expireDate").is_none());
        assert!(value.get("name").is_none());
    }
}
