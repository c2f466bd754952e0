use crate::shared::config::Config;
use crate::store::transactions::TransactionManager;
use crate::store::CacheStore;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CacheStore>,
    pub transactions: Arc<TransactionManager>,
    pub nodes: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Arc::new(CacheStore::new(config.cache.to_dto())),
            transactions: Arc::new(TransactionManager::new()),
            nodes: Arc::new(config.cluster.nodes.clone()),
        }
    }
}
