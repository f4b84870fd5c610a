//! Error types for stratum-ir
//!
//! Provides unified error handling across the crate.
//!
//! Contract violations (narrowing an operation to the wrong kind, asking for
//! the successor of an operation outside the given context) are programming
//! errors: the panicking APIs report them with these messages, the `try_`
//! variants hand them back. "No successor" is never an error; it is `None`.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for stratum-ir operations
#[derive(Debug, Error)]
pub enum IrError {
    /// Narrowing to a kind the operation does not hold
    #[error("Contract violation: expected {expected} operation, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Operation queried against a sequence that does not contain it
    #[error("Contract violation: {kind} operation is not an element of the queried context")]
    NotInContext { kind: &'static str },

    /// Region entered through an operation that does not own it
    #[error("Contract violation: sequence is not a region of the {kind} operation")]
    NotARegion { kind: &'static str },

    /// Program nesting exceeds the configured limit
    #[error("Nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// Break reachable without an enclosing loop
    #[error("Break is reachable outside of any loop")]
    StrayBreak,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IrError {
    /// True for errors that signal a caller bug rather than a program property
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            IrError::KindMismatch { .. } | IrError::NotInContext { .. } | IrError::NotARegion { .. }
        )
    }
}

/// Result type alias for stratum-ir operations
pub type Result<T> = std::result::Result<T, IrError>;
