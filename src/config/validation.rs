//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url("auth_url", &config.endpoints.auth_base)?;
    validate_base_url("helix_url", &config.endpoints.helix_base)?;

    if let Some(channel) = &config.channel {
        validate_channel(channel)?;
    }

    if config.credentials_path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "credentials".to_string(),
            message: "Credential file path cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate an endpoint base URL.
pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// A preset channel name must not be blank.
pub fn validate_channel(channel: &str) -> Result<()> {
    if channel.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "channel".to_string(),
            message: "Channel name cannot be empty".to_string(),
        });
    }
    Ok(())
}
