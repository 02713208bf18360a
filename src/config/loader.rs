//! Runtime configuration structures.

use std::path::PathBuf;

use crate::config::modes::FailurePolicy;

/// Default location of the persisted credential file.
pub const DEFAULT_CREDENTIALS_FILE: &str = "twitch.json";

/// Twitch identity provider base URL.
pub const DEFAULT_AUTH_BASE: &str = "https://id.twitch.tv";

/// Twitch Helix API base URL.
pub const DEFAULT_HELIX_BASE: &str = "https://api.twitch.tv/helix";

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON credential file.
    pub credentials_path: PathBuf,

    /// Directory the `clips-<channel>` folder is created in.
    pub output_directory: Option<PathBuf>,

    /// Channel name to try before prompting.
    pub channel: Option<String>,

    /// Behavior when a clip download fails.
    pub on_error: FailurePolicy,

    /// Whether to draw the progress bar.
    pub show_progress: bool,

    pub endpoints: Endpoints,
}

/// Remote service locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Identity provider base, `/oauth2/token` is appended.
    pub auth_base: String,

    /// Helix API base, `/users` and `/clips` are appended.
    pub helix_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base: DEFAULT_AUTH_BASE.to_string(),
            helix_base: DEFAULT_HELIX_BASE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            output_directory: None,
            channel: None,
            on_error: FailurePolicy::default(),
            show_progress: true,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Get the effective output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.output_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
