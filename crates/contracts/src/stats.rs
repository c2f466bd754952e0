//! Cache statistics DTOs served by `GET /api/stats`, `/api/nodes` and
//! `/api/memory_usage`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStatsDto {
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Bytes currently accounted to stored values.
    pub memory_usage: u64,
    pub entry_count: u64,
}

impl CacheStatsDto {
    /// Hit rate in percent; `None` when no lookups happened yet.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            return None;
        }
        Some(self.cache_hits as f64 * 100.0 / total as f64)
    }
}

/// Memory breakdown for one cache node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMemoryDto {
    pub node: String,
    pub main_cache: u64,
    pub replicas: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesResponse {
    pub nodes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        let stats = CacheStatsDto {
            cache_hits: 75,
            cache_misses: 25,
            memory_usage: 0,
            entry_count: 0,
        };
        assert_eq!(stats.hit_rate(), Some(75.0));
    }

    #[test]
    fn test_hit_rate_without_lookups() {
        let stats = CacheStatsDto {
            cache_hits: 0,
            cache_misses: 0,
            memory_usage: 0,
            entry_count: 0,
        };
        assert_eq!(stats.hit_rate(), None);
    }
}
