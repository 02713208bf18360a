//! Credential acquisition.

use crate::cli::Prompter;
use crate::config::Credentials;
use crate::error::Result;

pub const CLIENT_ID_LABEL: &str = "Twitch Client-ID";
pub const CLIENT_SECRET_LABEL: &str = "Twitch Client-Secret";

enum AcquireState {
    NeedInput,
    Done(Credentials),
}

/// Return `stored` if it is complete, otherwise prompt until both values are non-empty.
///
/// Only the form of the credentials is checked here.
pub async fn acquire_credentials(
    prompter: &mut dyn Prompter,
    stored: Option<Credentials>,
) -> Result<Credentials> {
    let mut state = match stored {
        Some(credentials) if credentials.is_complete() => AcquireState::Done(credentials),
        _ => AcquireState::NeedInput,
    };

    loop {
        state = match state {
            AcquireState::Done(credentials) => return Ok(credentials),
            AcquireState::NeedInput => {
                let client_id = prompter.input(CLIENT_ID_LABEL).await?;
                let client_secret = prompter.input(CLIENT_SECRET_LABEL).await?;
                let credentials = Credentials::new(client_id, client_secret);

                if credentials.is_complete() {
                    AcquireState::Done(credentials)
                } else {
                    AcquireState::NeedInput
                }
            }
        };
    }
}
