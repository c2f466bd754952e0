//! Cache search DTOs for `GET /api/search?key=…`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub key: String,
}

/// Result of a key lookup. `value` is present only when `found` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub key: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Seconds until the entry expires; `None` for entries without a TTL
    /// (or when the key was not found).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_remaining_secs: Option<u64>,
}
