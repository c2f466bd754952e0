use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};

use crate::state::AppState;

/// GET /metrics
///
/// Prometheus text exposition of the store counters. A fresh registry is
/// built per scrape and primed with the current snapshot.
pub async fn metrics(
    State(state): State<AppState>,
) -> Result<([(HeaderName, String); 1], String), StatusCode> {
    let stats = state.store.stats();

    let registry = Registry::new();
    let hits = IntCounter::with_opts(Opts::new("cache_hits", "Number of cache hits"))
        .map_err(internal)?;
    let misses = IntCounter::with_opts(Opts::new("cache_misses", "Number of cache misses"))
        .map_err(internal)?;
    hits.inc_by(stats.cache_hits);
    misses.inc_by(stats.cache_misses);
    registry.register(Box::new(hits)).map_err(internal)?;
    registry.register(Box::new(misses)).map_err(internal)?;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&registry.gather(), &mut buffer)
        .map_err(internal)?;
    let body = String::from_utf8(buffer).map_err(internal)?;

    Ok((
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        body,
    ))
}

fn internal<E: std::fmt::Display>(err: E) -> StatusCode {
    tracing::error!(%err, "metrics rendering failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    #[tokio::test]
    async fn test_metrics_export_hit_and_miss_counters() {
        let state = AppState::new(&load_config().unwrap());
        state.store.put("k", "v", None).unwrap();
        state.store.get("k");
        state.store.get("missing");

        let (headers, body) = metrics(State(state)).await.unwrap();
        assert!(headers[0].1.starts_with("text/plain"));
        assert!(body.contains("# TYPE cache_hits counter"));
        assert!(body.contains("cache_hits 1"));
        assert!(body.contains("cache_misses 1"));
    }

    #[tokio::test]
    async fn test_metrics_export_zero_counters_on_a_cold_store() {
        let state = AppState::new(&load_config().unwrap());

        let (_, body) = metrics(State(state)).await.unwrap();
        assert!(body.contains("cache_hits 0"));
        assert!(body.contains("cache_misses 0"));
    }
}
