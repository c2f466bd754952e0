use axum::extract::State;
use axum::http::StatusCode;
use std::time::Duration;

use crate::state::AppState;
use crate::store::transactions::Operation;

/// POST /api/cache/testdata
///
/// Seeds sample entries and one in-flight transaction so the dashboard has
/// data to show during development.
pub async fn insert_test_data(State(state): State<AppState>) -> StatusCode {
    match state.store.insert_test_data() {
        Ok(count) => {
            tracing::info!(count, "seeded cache test data");
        }
        Err(err) => {
            tracing::error!(%err, "failed to seed test data");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    let config = state.store.config();
    if config.enable_transactions {
        let id = state
            .transactions
            .begin(Duration::from_secs(config.transaction_timeout));
        state.transactions.record(
            id,
            Operation::Put {
                key: "session:ef56".to_string(),
                value: r#"{"user":"carol","role":"editor"}"#.to_string(),
                ttl: None,
            },
        );
        state.transactions.record(
            id,
            Operation::Evict {
                key: "rate-limit:10.0.0.7".to_string(),
                value: "42".to_string(),
                ttl: Some(Duration::from_secs(60)),
            },
        );
        tracing::info!(%id, "seeded demo transaction");
    }

    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;

    #[tokio::test]
    async fn test_testdata_populates_store_and_transactions() {
        let state = AppState::new(&load_config().unwrap());
        let status = insert_test_data(State(state.clone())).await;
        assert_eq!(status, StatusCode::OK);

        assert!(state.store.stats().entry_count >= 5);
        let transactions = state.transactions.list();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].operation_count, 2);
    }
}
