//! In-flight transaction bookkeeping.
//!
//! A transaction records the operations performed under it; commit hands them
//! back for application, rollback hands them back for reversal. Transactions
//! that outlive their timeout are removed by the expiry sweep.

use chrono::{DateTime, Utc};
use contracts::transactions::TransactionDto;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Operation {
    Put {
        key: String,
        value: String,
        ttl: Option<Duration>,
    },
    /// Keeps the evicted value and TTL so a rollback can restore the entry.
    Evict {
        key: String,
        value: String,
        ttl: Option<Duration>,
    },
}

#[derive(Debug)]
pub struct Transaction {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub operations: Vec<Operation>,
    pub expires_at: Instant,
}

#[derive(Default)]
pub struct TransactionManager {
    transactions: Mutex<HashMap<Uuid, Transaction>>,
}

impl TransactionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, timeout: Duration) -> Uuid {
        let id = Uuid::new_v4();
        let transaction = Transaction {
            id,
            started_at: Utc::now(),
            operations: Vec::new(),
            expires_at: Instant::now() + timeout,
        };
        self.transactions
            .lock()
            .expect("transactions lock poisoned")
            .insert(id, transaction);
        id
    }

    /// Record an operation under a transaction. Returns false when the
    /// transaction is unknown (already committed, rolled back or swept).
    pub fn record(&self, id: Uuid, operation: Operation) -> bool {
        let mut transactions = self.transactions.lock().expect("transactions lock poisoned");
        match transactions.get_mut(&id) {
            Some(transaction) => {
                transaction.operations.push(operation);
                true
            }
            None => false,
        }
    }

    pub fn commit(&self, id: Uuid) -> Option<Vec<Operation>> {
        self.transactions
            .lock()
            .expect("transactions lock poisoned")
            .remove(&id)
            .map(|t| t.operations)
    }

    pub fn rollback(&self, id: Uuid) -> Option<Vec<Operation>> {
        self.transactions
            .lock()
            .expect("transactions lock poisoned")
            .remove(&id)
            .map(|t| t.operations)
    }

    /// In-flight transactions, oldest first.
    pub fn list(&self) -> Vec<TransactionDto> {
        let now = Instant::now();
        let transactions = self.transactions.lock().expect("transactions lock poisoned");
        let mut list: Vec<TransactionDto> = transactions
            .values()
            .map(|t| TransactionDto {
                id: t.id,
                started_at: t.started_at,
                operation_count: t.operations.len(),
                expires_in_secs: t.expires_at.saturating_duration_since(now).as_secs(),
            })
            .collect();
        list.sort_by_key(|t| t.started_at);
        list
    }

    /// Drop expired transactions; returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut transactions = self.transactions.lock().expect("transactions lock poisoned");
        let before = transactions.len();
        transactions.retain(|_, t| t.expires_at > now);
        before - transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn put(key: &str) -> Operation {
        Operation::Put {
            key: key.to_string(),
            value: "v".to_string(),
            ttl: None,
        }
    }

    #[test]
    fn test_begin_record_commit() {
        let manager = TransactionManager::new();
        let id = manager.begin(TIMEOUT);
        assert!(manager.record(id, put("a")));
        assert!(manager.record(id, put("b")));

        let operations = manager.commit(id).unwrap();
        assert_eq!(operations.len(), 2);
        // Committed transactions are gone.
        assert!(manager.commit(id).is_none());
    }

    #[test]
    fn test_record_on_unknown_transaction() {
        let manager = TransactionManager::new();
        assert!(!manager.record(Uuid::new_v4(), put("a")));
    }

    #[test]
    fn test_list_reports_in_flight() {
        let manager = TransactionManager::new();
        let id = manager.begin(TIMEOUT);
        manager.record(id, put("a"));

        let list = manager.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, id);
        assert_eq!(list[0].operation_count, 1);
        assert!(list[0].expires_in_secs <= 30);
    }

    #[test]
    fn test_rollback_removes_transaction() {
        let manager = TransactionManager::new();
        let id = manager.begin(TIMEOUT);
        assert!(manager.rollback(id).is_some());
        assert!(manager.list().is_empty());
    }

    #[test]
    fn test_sweep_removes_expired_only() {
        let manager = TransactionManager::new();
        manager.begin(Duration::from_secs(0));
        let alive = manager.begin(TIMEOUT);

        assert_eq!(manager.sweep_expired(), 1);
        let list = manager.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, alive);
    }
}
