use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::transactions::{
    BeginTransactionResponse, TransactionActionResponse, TransactionListResponse,
};
use std::time::Duration;
use uuid::Uuid;

use crate::state::AppState;

/// GET /api/transactions
pub async fn list(State(state): State<AppState>) -> Json<TransactionListResponse> {
    // Expired transactions are swept lazily on listing, in addition to the
    // periodic sweep task.
    let swept = state.transactions.sweep_expired();
    if swept > 0 {
        tracing::info!(swept, "removed expired transactions");
    }
    Json(TransactionListResponse {
        transactions: state.transactions.list(),
    })
}

/// POST /api/transactions
pub async fn begin(
    State(state): State<AppState>,
) -> Result<Json<BeginTransactionResponse>, StatusCode> {
    let config = state.store.config();
    if !config.enable_transactions {
        tracing::warn!("transaction begin rejected: transactions are disabled");
        return Err(StatusCode::CONFLICT);
    }
    let id = state
        .transactions
        .begin(Duration::from_secs(config.transaction_timeout));
    tracing::info!(%id, "transaction started");
    Ok(Json(BeginTransactionResponse { id }))
}

/// POST /api/transactions/:id/commit
pub async fn commit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionActionResponse>, StatusCode> {
    match state.transactions.commit(id) {
        Some(operations) => {
            let applied = state.store.apply_commit(operations);
            tracing::info!(%id, applied, "transaction committed");
            Ok(Json(TransactionActionResponse {
                id,
                operations: applied,
            }))
        }
        None => {
            tracing::warn!(%id, "commit for unknown transaction");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// POST /api/transactions/:id/rollback
pub async fn rollback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionActionResponse>, StatusCode> {
    match state.transactions.rollback(id) {
        Some(operations) => {
            let reverted = state.store.apply_rollback(operations);
            tracing::info!(%id, reverted, "transaction rolled back");
            Ok(Json(TransactionActionResponse {
                id,
                operations: reverted,
            }))
        }
        None => {
            tracing::warn!(%id, "rollback for unknown transaction");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use crate::store::transactions::Operation;

    fn test_state() -> AppState {
        AppState::new(&load_config().unwrap())
    }

    #[tokio::test]
    async fn test_begin_then_list() {
        let state = test_state();
        let Json(begun) = begin(State(state.clone())).await.unwrap();

        let Json(listed) = list(State(state)).await;
        assert_eq!(listed.transactions.len(), 1);
        assert_eq!(listed.transactions[0].id, begun.id);
        assert_eq!(listed.transactions[0].operation_count, 0);
    }

    #[tokio::test]
    async fn test_begin_rejected_when_disabled() {
        let state = test_state();
        state.store.apply_config_update(&contracts::config::ConfigUpdateRequest {
            enable_transactions: Some(false),
            ..Default::default()
        });

        let result = begin(State(state)).await;
        assert_eq!(result.err(), Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_commit_applies_recorded_puts() {
        let state = test_state();
        let Json(begun) = begin(State(state.clone())).await.unwrap();
        state.transactions.record(
            begun.id,
            Operation::Put {
                key: "tx-key".to_string(),
                value: "tx-value".to_string(),
                ttl: None,
            },
        );

        let Json(result) = commit(State(state.clone()), Path(begun.id)).await.unwrap();
        assert_eq!(result.operations, 1);
        assert_eq!(state.store.get("tx-key").unwrap().value, "tx-value");
    }

    #[tokio::test]
    async fn test_rollback_reverts_recorded_puts() {
        let state = test_state();
        state.store.put("tx-key", "spilled", None).unwrap();
        let Json(begun) = begin(State(state.clone())).await.unwrap();
        state.transactions.record(
            begun.id,
            Operation::Put {
                key: "tx-key".to_string(),
                value: "spilled".to_string(),
                ttl: None,
            },
        );

        let Json(result) = rollback(State(state.clone()), Path(begun.id)).await.unwrap();
        assert_eq!(result.operations, 1);
        assert!(state.store.get("tx-key").is_none());
    }

    #[tokio::test]
    async fn test_commit_unknown_transaction_is_404() {
        let state = test_state();
        let result = commit(State(state), Path(Uuid::new_v4())).await;
        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }
}
