use crate::shared::api_utils::api_url;
use contracts::transactions::{
    BeginTransactionResponse, TransactionActionResponse, TransactionDto, TransactionListResponse,
};
use gloo_net::http::Request;
use uuid::Uuid;

/// Fetch in-flight transactions, oldest first.
pub async fn list_transactions() -> Result<Vec<TransactionDto>, String> {
    let response = Request::get(&api_url("/api/transactions"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: TransactionListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.transactions)
}

/// Start a new transaction.
pub async fn begin_transaction() -> Result<BeginTransactionResponse, String> {
    let response = Request::post(&api_url("/api/transactions"))
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

/// Commit a transaction, applying its recorded operations.
pub async fn commit_transaction(id: Uuid) -> Result<TransactionActionResponse, String> {
    transaction_action(id, "commit").await
}

/// Roll a transaction back, reverting its recorded operations.
pub async fn rollback_transaction(id: Uuid) -> Result<TransactionActionResponse, String> {
    transaction_action(id, "rollback").await
}

async fn transaction_action(id: Uuid, action: &str) -> Result<TransactionActionResponse, String> {
    let url = api_url(&format!("/api/transactions/{}/{}", id, action));

    let response = Request::post(&url)
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
