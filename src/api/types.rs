//! API response type definitions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Token endpoint response for the client credentials grant.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
}

/// Helix list response without pagination.
#[derive(Debug, Deserialize)]
pub struct HelixResponse<T> {
    pub data: Vec<T>,
}

/// Helix cursor-paginated list response.
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination block; no cursor means there is no further page.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub cursor: Option<String>,
}

impl Pagination {
    /// The cursor for the next page, if any.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// Twitch user as returned by `/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
}

/// Resolved channel identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    /// Canonical login name.
    pub name: String,
    pub display_name: String,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.login,
            display_name: user.display_name,
        }
    }
}

/// A clip as returned by `/clips`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Clip {
    pub id: String,
    pub title: String,
    #[serde(rename = "view_count")]
    pub views: u64,
    #[serde(rename = "creator_name")]
    pub creator_display_name: String,
    #[serde(rename = "created_at")]
    pub creation_date: DateTime<Utc>,
    pub thumbnail_url: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub broadcaster_name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_clip_page() {
        let json = r#"{
            "data": [{
                "id": "AwkwardHelplessSalamanderSwiftRage",
                "url": "https://clips.twitch.tv/AwkwardHelplessSalamanderSwiftRage",
                "broadcaster_id": "67955580",
                "broadcaster_name": "ChewieMelodies",
                "creator_name": "MrMarshall",
                "title": "babymetal",
                "view_count": 10,
                "created_at": "2017-11-30T22:34:18Z",
                "thumbnail_url": "https://clips-media-assets.twitch.tv/157589949-preview-480x272.jpg",
                "duration": 60
            }],
            "pagination": {"cursor": "eyJiIjpudWxsLCJhIjoiIn0"}
        }"#;

        let page: PaginatedResponse<Clip> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        let clip = &page.data[0];
        assert_eq!(clip.views, 10);
        assert_eq!(clip.creator_display_name, "MrMarshall");
        assert_eq!(
            clip.creation_date,
            Utc.with_ymd_and_hms(2017, 11, 30, 22, 34, 18).unwrap()
        );
        assert_eq!(page.pagination.next_cursor(), Some("eyJiIjpudWxsLCJhIjoiIn0"));
    }

    #[test]
    fn test_empty_pagination_is_end() {
        let page: PaginatedResponse<Clip> =
            serde_json::from_str(r#"{"data": [], "pagination": {}}"#).unwrap();
        assert!(page.pagination.next_cursor().is_none());

        let page: PaginatedResponse<Clip> =
            serde_json::from_str(r#"{"data": [], "pagination": {"cursor": ""}}"#).unwrap();
        assert!(page.pagination.next_cursor().is_none());
    }

    #[test]
    fn test_missing_data_is_rejected() {
        assert!(serde_json::from_str::<PaginatedResponse<Clip>>(r#"{"error": "x"}"#).is_err());
    }

    #[test]
    fn test_identity_from_user() {
        let user = User {
            id: "1".into(),
            login: "foo".into(),
            display_name: "Foo".into(),
        };
        let identity = Identity::from(user);
        assert_eq!(identity.name, "foo");
        assert_eq!(identity.display_name, "Foo");
    }
}
