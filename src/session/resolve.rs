//! Channel name resolution.

use crate::api::{HelixClient, Identity};
use crate::cli::Prompter;
use crate::error::{Error, Result};
use crate::output::print_warning;

pub const STREAMER_LABEL: &str = "Streamer name?";

/// Resolve a channel name to its identity, prompting until a lookup succeeds.
///
/// `preset` is tried once before the first prompt. Names are passed through as typed;
/// matching is left to Twitch.
pub async fn resolve_channel(
    api: &HelixClient,
    prompter: &mut dyn Prompter,
    preset: Option<String>,
) -> Result<Identity> {
    let mut preset = preset;

    loop {
        let name = match preset.take() {
            Some(name) => name,
            None => prompter.input(STREAMER_LABEL).await?,
        };

        if name.is_empty() {
            continue;
        }

        match api.get_user_by_name(&name).await {
            Ok(Some(user)) => {
                let identity = Identity::from(user);
                tracing::info!("Resolved {} to user id {}", identity.name, identity.id);
                return Ok(identity);
            }
            Ok(None) => {}
            // Twitch answers malformed login names with 400
            Err(Error::BadRequest(e)) => tracing::debug!("Lookup of {:?} failed: {}", name, e),
            Err(e) => return Err(e),
        }

        print_warning(&format!("Are you sure \"{}\" exists?", name));
    }
}
