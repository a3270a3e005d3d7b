use log::warn;
use reqwest::Client;

use crate::config::HttpSettings;
use crate::error::Result;

/// Build the HTTP client shared by every tool.
pub fn build_http_client(settings: &HttpSettings) -> Result<Client> {
    if settings.accept_invalid_certs {
        warn!("TLS certificate validation is disabled for tool endpoints");
    }

    let client = Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(settings.timeout)
        .danger_accept_invalid_certs(settings.accept_invalid_certs)
        .build()?;

    Ok(client)
}
