//! Persisted Twitch application credentials.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::{print_info, print_warning};

/// Twitch application credentials (client credentials grant).
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both fields are present. Says nothing about server-side validity.
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Reads and writes the credential file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored credentials.
    ///
    /// A missing, unreadable, malformed or incomplete file yields `None`.
    pub fn load(&self) -> Option<Credentials> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No stored credentials at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Credentials>(&content) {
            Ok(credentials) if credentials.is_complete() => Some(credentials),
            Ok(_) => {
                tracing::debug!("Stored credentials in {} are incomplete", self.path.display());
                None
            }
            Err(e) => {
                tracing::debug!("Ignoring malformed {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Save credentials. Failures are reported and otherwise ignored.
    pub fn save(&self, credentials: &Credentials) {
        print_info(&format!(
            "Saving Client-ID and Client-Secret to {}",
            self.path.display()
        ));

        if let Err(e) = self.try_save(credentials) {
            tracing::warn!("Failed to write {}: {}", self.path.display(), e);
            print_warning(&format!("Failed to save config to {}", self.path.display()));
        }
    }

    fn try_save(&self, credentials: &Credentials) -> Result<()> {
        let content = serde_json::to_string(credentials)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
