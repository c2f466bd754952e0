//! Shared contracts between the console frontend and backend.
//!
//! DTOs are plain serde types; `views` carries the closed enumeration of
//! dashboard views the shell navigates between.

pub mod config;
pub mod search;
pub mod stats;
pub mod transactions;
pub mod views;
