use crate::shared::api_utils::api_url;
use contracts::stats::{CacheStatsDto, NodeMemoryDto, NodesResponse};
use gloo_net::http::Request;

/// Fetch hit/miss counters and memory accounting.
pub async fn get_stats() -> Result<CacheStatsDto, String> {
    let response = Request::get(&api_url("/api/stats"))
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

/// Fetch the known cluster node addresses.
pub async fn get_nodes() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url("/api/nodes"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: NodesResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.nodes)
}

/// Fetch the per-node memory breakdown.
pub async fn get_memory_usage() -> Result<Vec<NodeMemoryDto>, String> {
    let response = Request::get(&api_url("/api/memory_usage"))
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
