//! App access token exchange (OAuth client credentials grant).

use reqwest::Client;

use crate::api::types::TokenResponse;
use crate::config::Credentials;
use crate::error::{Error, Result};

/// An app access token issued by the identity provider.
#[derive(Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Build the token endpoint URL from the identity provider base.
pub fn token_url(auth_base: &str) -> String {
    format!("{}/oauth2/token", auth_base.trim_end_matches('/'))
}

/// Exchange client credentials for an app access token.
///
/// Any non-success response is reported as [`Error::Authentication`].
pub async fn request_app_token(
    client: &Client,
    auth_base: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let url = token_url(auth_base);
    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    tracing::debug!("POST {}", url);

    let response = client.post(&url).form(&params).send().await?;
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Authentication(format!(
            "HTTP {}: {}",
            status,
            if body.is_empty() {
                "Token request rejected"
            } else {
                &body
            }
        )));
    }

    let text = response.text().await?;
    let token: TokenResponse = serde_json::from_str(&text)
        .map_err(|e| Error::Authentication(format!("Failed to parse token response: {}", e)))?;

    if token.access_token.is_empty() {
        return Err(Error::Authentication("Empty access token".into()));
    }

    if let Some(kind) = &token.token_type {
        tracing::debug!("Obtained {} token, expires in {:?}s", kind, token.expires_in);
    }

    Ok(AccessToken {
        token: token.access_token,
        expires_in: token.expires_in,
    })
}
