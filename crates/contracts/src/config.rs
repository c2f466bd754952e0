//! Runtime cache configuration as exposed by `GET /api/config` and updated
//! through `POST /api/config`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfigDto {
    /// Memory budget for stored values, bytes.
    pub max_memory: u64,
    /// Default TTL applied to entries stored without one, seconds.
    pub default_ttl: u64,
    /// Access count below which an entry is an eviction candidate.
    pub frequency_threshold: u64,
    pub replication_factor: u32,
    pub enable_transactions: bool,
    /// Transaction lifetime before the expiry sweep removes it, seconds.
    pub transaction_timeout: u64,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdateRequest {
    pub max_memory: Option<u64>,
    pub default_ttl: Option<u64>,
    pub frequency_threshold: Option<u64>,
    pub replication_factor: Option<u32>,
    pub enable_transactions: Option<bool>,
    pub transaction_timeout: Option<u64>,
}

impl ConfigUpdateRequest {
    pub fn is_empty(&self) -> bool {
        self.max_memory.is_none()
            && self.default_ttl.is_none()
            && self.frequency_threshold.is_none()
            && self.replication_factor.is_none()
            && self.enable_transactions.is_none()
            && self.transaction_timeout.is_none()
    }

    /// Field-level validation before the update is applied.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.max_memory {
            return Err("max_memory must be greater than zero".to_string());
        }
        if let Some(0) = self.replication_factor {
            return Err("replication_factor must be at least 1".to_string());
        }
        if let Some(0) = self.transaction_timeout {
            return Err("transaction_timeout must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update() {
        let update = ConfigUpdateRequest::default();
        assert!(update.is_empty());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_zero_max_memory_rejected() {
        let update = ConfigUpdateRequest {
            max_memory: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_partial_update_deserializes() {
        let update: ConfigUpdateRequest =
            serde_json::from_str(r#"{"default_ttl": 600}"#).unwrap();
        assert_eq!(update.default_ttl, Some(600));
        assert!(update.max_memory.is_none());
        assert!(!update.is_empty());
    }
}
