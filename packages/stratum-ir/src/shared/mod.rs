//! Shared module - Common types used by every dialect and analysis
//!
//! Nothing in here knows about concrete operation kinds.

pub mod models;

// Re-exports for convenience
pub use models::*;
