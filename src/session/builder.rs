//! Authenticated session building.

use reqwest::Client;

use crate::api::{request_app_token, HelixClient};
use crate::cli::Prompter;
use crate::config::{CredentialStore, Endpoints};
use crate::error::Result;
use crate::output::print_error;
use crate::session::acquire::acquire_credentials;

/// Build a Helix session, prompting until the identity provider accepts the credentials.
///
/// Stored credentials are tried first. Rejected credentials are discarded and never
/// saved; accepted ones are saved before the session is returned.
pub async fn build_session(
    http: &Client,
    endpoints: &Endpoints,
    store: &CredentialStore,
    prompter: &mut dyn Prompter,
) -> Result<HelixClient> {
    let mut candidate = store.load();

    loop {
        let credentials = acquire_credentials(prompter, candidate.take()).await?;

        match request_app_token(http, &endpoints.auth_base, &credentials).await {
            Ok(token) => {
                tracing::info!("Authenticated with Client-ID {}", credentials.client_id);
                store.save(&credentials);
                return Ok(HelixClient::new(
                    http.clone(),
                    &endpoints.helix_base,
                    credentials.client_id,
                    token,
                ));
            }
            Err(e) => {
                tracing::debug!("Token exchange failed: {}", e);
                print_error("Your provided Client-ID and/or Client-Secret don't seem to be correct");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::testing::ScriptedPrompter;
    use crate::config::Credentials;
    use crate::error::Error;
    use crate::session::{CLIENT_ID_LABEL, CLIENT_SECRET_LABEL};
    use tempfile::TempDir;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn token_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .and(body_string_contains("client_id=good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "tok",
                "expires_in": 3600,
                "token_type": "bearer"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid client"))
            .mount(&server)
            .await;
        server
    }

    fn endpoints(server: &MockServer) -> Endpoints {
        Endpoints {
            auth_base: server.uri(),
            helix_base: server.uri(),
        }
    }

    #[tokio::test]
    async fn test_stored_valid_credentials_skip_prompt() {
        let server = token_server().await;
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("twitch.json"));
        std::fs::write(store.path(), r#"{"clientId":"good","clientSecret":"s"}"#).unwrap();
        let mut prompter = ScriptedPrompter::new(&[]);

        build_session(&Client::new(), &endpoints(&server), &store, &mut prompter)
            .await
            .unwrap();

        assert!(prompter.asked.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_stored_credentials_reprompt_and_save() {
        let server = token_server().await;
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("twitch.json"));
        std::fs::write(store.path(), r#"{"clientId":"bad","clientSecret":"s"}"#).unwrap();
        let mut prompter = ScriptedPrompter::new(&["bad", "s", "good", "s"]);

        build_session(&Client::new(), &endpoints(&server), &store, &mut prompter)
            .await
            .unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                CLIENT_ID_LABEL,
                CLIENT_SECRET_LABEL,
                CLIENT_ID_LABEL,
                CLIENT_SECRET_LABEL
            ]
        );
        assert_eq!(store.load(), Some(Credentials::new("good", "s")));
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_not_saved() {
        let server = token_server().await;
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("twitch.json"));
        let mut prompter = ScriptedPrompter::new(&["bad", "s"]);

        let result =
            build_session(&Client::new(), &endpoints(&server), &store, &mut prompter).await;

        assert!(matches!(result, Err(Error::InputClosed(_))));
        assert!(!store.path().exists());
    }
}
