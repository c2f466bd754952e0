use crate::shared::api_utils::api_url;
use contracts::config::{CacheConfigDto, ConfigUpdateRequest};
use gloo_net::http::Request;

/// Fetch the current runtime configuration.
pub async fn get_config() -> Result<CacheConfigDto, String> {
    let response = Request::get(&api_url("/api/config"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Apply a configuration update; returns the resulting configuration.
pub async fn update_config(update: &ConfigUpdateRequest) -> Result<CacheConfigDto, String> {
    let body = serde_json::to_string(update).map_err(|e| format!("Serialize error: {}", e))?;

    let response = Request::post(&api_url("/api/config"))
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
