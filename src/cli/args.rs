//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, FailurePolicy, DEFAULT_CREDENTIALS_FILE};

/// Twitch clip backup CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitch-clip-backup",
    version,
    about = "Back up every clip of a Twitch channel",
    long_about = "Downloads all clips of a Twitch channel into clips-<channel>/videos and \
                  writes an index.csv describing each clip.\n\n\
                  Requires a Twitch application Client-ID and Client-Secret, which are asked \
                  for interactively and cached in the credential file."
)]
pub struct Args {
    /// Channel (login name) to back up. Prompted for when absent or not found.
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Path of the credential file.
    #[arg(
        long = "credentials",
        env = "TWITCH_CREDENTIALS_FILE",
        default_value = DEFAULT_CREDENTIALS_FILE
    )]
    pub credentials: PathBuf,

    /// Base directory the clips-<channel> folder is created in.
    #[arg(short = 'd', long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Skip clips that fail to download instead of aborting.
    #[arg(long)]
    pub skip_failed: bool,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Identity provider base URL.
    #[arg(long = "auth-url", env = "TWITCH_AUTH_URL", hide = true)]
    pub auth_url: Option<String>,

    /// Helix API base URL.
    #[arg(long = "helix-url", env = "TWITCH_HELIX_URL", hide = true)]
    pub helix_url: Option<String>,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.credentials_path = self.credentials;

        if let Some(channel) = self.channel {
            config.channel = Some(channel);
        }

        if let Some(dir) = self.output_directory {
            config.output_directory = Some(dir);
        }

        if self.skip_failed {
            config.on_error = FailurePolicy::Skip;
        }

        if self.quiet {
            config.show_progress = false;
        }

        if let Some(url) = self.auth_url {
            config.endpoints.auth_base = url;
        }

        if let Some(url) = self.helix_url {
            config.endpoints.helix_base = url;
        }
    }
}
