use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// All console API routes.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/metrics", get(handlers::metrics::metrics))
        // Cache statistics (default view)
        .route("/api/stats", get(handlers::stats::stats))
        .route("/api/nodes", get(handlers::stats::nodes))
        .route("/api/memory_usage", get(handlers::stats::memory_usage))
        // Cache search
        .route("/api/search", get(handlers::search::search))
        // Transaction management
        .route(
            "/api/transactions",
            get(handlers::transactions::list).post(handlers::transactions::begin),
        )
        .route(
            "/api/transactions/:id/commit",
            post(handlers::transactions::commit),
        )
        .route(
            "/api/transactions/:id/rollback",
            post(handlers::transactions::rollback),
        )
        // Configuration
        .route(
            "/api/config",
            get(handlers::config::get_config).post(handlers::config::update_config),
        )
        // Development helpers
        .route("/api/cache/testdata", post(handlers::cache::insert_test_data))
        .with_state(state)
}
