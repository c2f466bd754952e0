use axum::extract::{Query, State};
use axum::Json;
use contracts::search::{SearchQuery, SearchResultDto};

use crate::state::AppState;

/// GET /api/search?key=…
///
/// A missing `key` parameter is rejected by the extractor with 400; a key
/// that is not in the cache is a normal `found: false` response (and counts
/// as a miss, exactly like a client lookup would).
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResultDto> {
    let result = match state.store.get(&query.key) {
        Some(hit) => SearchResultDto {
            key: query.key,
            found: true,
            value: Some(hit.value),
            ttl_remaining_secs: hit.ttl_remaining.map(|t| t.as_secs()),
        },
        None => SearchResultDto {
            key: query.key,
            found: false,
            value: None,
            ttl_remaining_secs: None,
        },
    };
    Json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    #[tokio::test]
    async fn test_search_finds_stored_key() {
        let state = AppState::new(&load_config().unwrap());
        state.store.put("session:ab12", "payload", None).unwrap();

        let Json(result) = search(
            State(state),
            Query(SearchQuery {
                key: "session:ab12".to_string(),
            }),
        )
        .await;
        assert!(result.found);
        assert_eq!(result.value.as_deref(), Some("payload"));
        assert!(result.ttl_remaining_secs.is_some());
    }

    #[tokio::test]
    async fn test_search_misses_unknown_key() {
        let state = AppState::new(&load_config().unwrap());
        let Json(result) = search(
            State(state.clone()),
            Query(SearchQuery {
                key: "absent".to_string(),
            }),
        )
        .await;
        assert!(!result.found);
        assert!(result.value.is_none());
        assert_eq!(state.store.stats().cache_misses, 1);
    }
}
