use axum::extract::State;
use axum::Json;
use contracts::stats::{CacheStatsDto, NodeMemoryDto, NodesResponse};

use crate::state::AppState;

/// GET /api/stats
pub async fn stats(State(state): State<AppState>) -> Json<CacheStatsDto> {
    Json(state.store.stats())
}

/// GET /api/nodes
pub async fn nodes(State(state): State<AppState>) -> Json<NodesResponse> {
    Json(NodesResponse {
        nodes: state.nodes.as_ref().clone(),
    })
}

/// GET /api/memory_usage
///
/// Per-node collection is not wired up on a single console node; the
/// breakdown is derived from local accounting and the replication factor.
pub async fn memory_usage(State(state): State<AppState>) -> Json<Vec<NodeMemoryDto>> {
    let total = state.store.current_memory();
    let replication_factor = state.store.config().replication_factor as u64;
    let node_count = state.nodes.len().max(1) as u64;

    let main_cache = total / node_count;
    let replicas = main_cache * replication_factor.saturating_sub(1);

    let breakdown = state
        .nodes
        .iter()
        .map(|node| NodeMemoryDto {
            node: node.clone(),
            main_cache,
            replicas,
        })
        .collect();
    Json(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    fn test_state() -> AppState {
        AppState::new(&load_config().unwrap())
    }

    #[tokio::test]
    async fn test_stats_reflect_store_activity() {
        let state = test_state();
        state.store.put("k", "value", None).unwrap();
        state.store.get("k");
        state.store.get("missing");

        let Json(stats) = stats(State(state)).await;
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 1);
        assert_eq!(stats.entry_count, 1);
    }

    #[tokio::test]
    async fn test_memory_usage_covers_every_node() {
        let state = test_state();
        state.store.put("k", "0123456789", None).unwrap();

        let node_count = state.nodes.len();
        let Json(breakdown) = memory_usage(State(state)).await;
        assert_eq!(breakdown.len(), node_count);
        assert!(breakdown.iter().all(|n| n.main_cache > 0));
    }
}
