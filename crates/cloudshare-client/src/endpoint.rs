//! Share API endpoint URLs.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Path of the share collection below the instance base URL.
pub const SHARES_PATH: &str = "apps/files_sharing/api/v1/shares";

/// Query string requesting a JSON response body.
const FORMAT_QUERY: &str = "format=json";

/// Build the URL for the share collection or a single share.
///
/// A share that has not been persisted yet has no id and posts to the
/// collection URL; a persisted share addresses its own sub-resource.
/// The id is percent-encoded, so non-numeric identifiers are safe.
pub fn share_url(base: &str, id: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    match id {
        Some(id) => format!(
            "{base}/{SHARES_PATH}/{}?{FORMAT_QUERY}",
            utf8_percent_encode(id, NON_ALPHANUMERIC)
        ),
        None => format!("{base}/{SHARES_PATH}?{FORMAT_QUERY}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cloud.example.com";

    #[test]
    fn test_member_url_carries_the_id_segment() {
        assert_eq!(
            share_url(BASE, Some("42")),
            "https://cloud.example.com/apps/files_sharing/api/v1/shares/42?format=json"
        );
    }

    #[test]
    fn test_collection_url_has_no_id_segment() {
        assert_eq!(
            share_url(BASE, None),
            "https://cloud.example.com/apps/files_sharing/api/v1/shares?format=json"
        );
    }

    #[test]
    fn test_non_numeric_ids_are_percent_encoded() {
        let url = share_url(BASE, Some("a b"));
        assert!(url.ends_with("/shares/a%20b?format=json"), "got {url}");
    }

    #[test]
    fn test_trailing_slash_on_base_is_tolerated() {
        assert_eq!(
            share_url("https://cloud.example.com/", Some("42")),
            share_url(BASE, Some("42"))
        );
    }
}
