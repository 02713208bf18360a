//! Twitch Helix API HTTP client.

use reqwest::{header, Client, Response};

use crate::api::auth::AccessToken;
use crate::api::types::*;
use crate::error::{Error, Result};

/// Number of clips requested per page.
pub const CLIP_PAGE_SIZE: usize = 100;

/// Build the shared HTTP client.
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))
}

/// Authenticated Helix session.
///
/// Holds a token that was issued when the session was built; there is no refresh.
pub struct HelixClient {
    client: Client,
    base: String,
    client_id: String,
    token: AccessToken,
}

impl HelixClient {
    pub fn new(client: Client, base: &str, client_id: String, token: AccessToken) -> Self {
        Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            client_id,
            token,
        }
    }

    /// Build common headers for Helix requests.
    fn build_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let bearer = format!("Bearer {}", self.token.token);
        headers.insert(
            header::AUTHORIZATION,
            bearer
                .parse()
                .map_err(|_| Error::Authentication("Access token is not a valid header".into()))?,
        );
        headers.insert(
            "client-id",
            self.client_id
                .parse()
                .map_err(|_| Error::Authentication("Client-ID is not a valid header".into()))?,
        );

        Ok(headers)
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base, path);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .headers(self.build_headers()?)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(format!("HTTP {}: {}", status, body)));
        }

        if status == 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::BadRequest(format!("{}: {}", path, body)));
        }

        if status == 429 {
            return Err(Error::Api("Rate limited by Twitch".into()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("HTTP {} for {}: {}", status, path, body)));
        }

        Ok(response)
    }

    /// Look up a user by exact login name.
    pub async fn get_user_by_name(&self, login: &str) -> Result<Option<User>> {
        let response = self.get("/users", &[("login", login)]).await?;
        let text = response.text().await?;
        tracing::debug!("Users response: {}", text);

        let users: HelixResponse<User> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!("Failed to parse users: {} - Response: {}", e, text))
        })?;

        Ok(users.data.into_iter().next())
    }

    /// Fetch one page of clips for a broadcaster.
    ///
    /// A body that is not a paginated clip list is [`Error::ClipListing`].
    pub async fn get_clips_page(
        &self,
        broadcaster_id: &str,
        cursor: Option<&str>,
        first: usize,
    ) -> Result<PaginatedResponse<Clip>> {
        let first = first.to_string();
        let mut query = vec![("broadcaster_id", broadcaster_id), ("first", first.as_str())];
        if let Some(cursor) = cursor {
            query.push(("after", cursor));
        }

        let response = self.get("/clips", &query).await?;
        let text = response.text().await?;
        tracing::debug!("Clips response length: {} bytes", text.len());

        serde_json::from_str(&text).map_err(|e| {
            Error::ClipListing(format!(
                "Unexpected clip list response: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Download a file from a URL. No Helix headers are sent.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        Ok(response)
    }
}
