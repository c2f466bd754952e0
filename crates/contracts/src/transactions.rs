//! Transaction management DTOs for the `/api/transactions` routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of one in-flight transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub operation_count: usize,
    /// Seconds until the transaction expires and is swept.
    pub expires_in_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeginTransactionResponse {
    pub id: Uuid,
}

/// Outcome of a commit or rollback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionActionResponse {
    pub id: Uuid,
    /// Number of recorded operations that were applied (commit) or
    /// reverted (rollback).
    pub operations: usize,
}
