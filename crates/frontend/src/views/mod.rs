pub mod configuration;
pub mod search;
pub mod stats;
pub mod transactions;
