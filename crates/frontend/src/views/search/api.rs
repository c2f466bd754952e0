use crate::shared::api_utils::api_url;
use contracts::search::SearchResultDto;
use gloo_net::http::Request;

/// Look a key up in the cache. A key absent from the cache is a normal
/// `found: false` response, not an error.
pub async fn search_key(key: &str) -> Result<SearchResultDto, String> {
    let url = api_url(&format!("/api/search?key={}", urlencoding::encode(key)));

    let response = Request::get(&url)
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
