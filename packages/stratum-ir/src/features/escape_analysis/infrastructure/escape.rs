//! Break escape over the `Operation` contract
//!
//! A loop is an absorbing boundary: whatever break its body reaches targets
//! the loop itself, so nothing propagates past it.

use crate::features::operation::domain::Sequence;
use crate::features::operation::ports::{Operation, Structure};

/// Whether `op` can reach a break targeting a loop that encloses `op`
pub fn escape<Op: Operation>(op: &Op) -> bool {
    match op.structure() {
        Structure::Break => true,
        Structure::Atomic | Structure::Terminate | Structure::Loop { .. } => false,
        Structure::Branch {
            then_body,
            else_body,
        } => sequence_escapes(then_body) || sequence_escapes(else_body),
        Structure::Transparent { body } => sequence_escapes(body),
    }
}

/// OR of [`escape`] over the elements
pub fn sequence_escapes<Op: Operation>(sequence: &Sequence<Op>) -> bool {
    sequence.iter().any(escape)
}
