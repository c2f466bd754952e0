pub mod cache;
pub mod config;
pub mod metrics;
pub mod search;
pub mod stats;
pub mod transactions;
