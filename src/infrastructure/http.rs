use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config_loader::ServicesConfig;
use super::error::UpstreamError;

/// Shared HTTP client with the configured timeout and user agent
pub fn build_client(config: &ServicesConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.as_str())
        .build()
        .context("Failed to create HTTP client")
}

pub fn parse_base_url(service: &'static str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| UpstreamError::InvalidUrl { service, source }.into())
}

/// Append path segments to a base URL, percent-encoding each one
pub fn join_segments(service: &'static str, base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("{} base URL cannot take a path: {}", service, base_url))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET a JSON body, mapping non-2xx statuses to [`UpstreamError::Status`]
pub async fn get_json(client: &Client, service: &'static str, url: Url) -> Result<Value> {
    debug!("GET {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status {
            service,
            status: status.as_u16(),
            url: url.to_string(),
        }
        .into());
    }

    response
        .json::<Value>()
        .await
        .with_context(|| format!("Failed to decode JSON from {}", url))
}
