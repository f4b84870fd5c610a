//! Operation kinds shared across dialects
//!
//! These are the payloads dialect unions hold. The dialect-specific break
//! kinds live with their dialects.

use crate::features::operation::domain::Sequence;
use crate::shared::models::{Expression, Variable};
use serde::{Deserialize, Serialize};

/// No-op
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skip;

/// Ends the whole program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Terminate;

/// `target = value`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assign {
    pub target: Variable,
    pub value: Expression,
}

impl Assign {
    pub fn new(target: impl Into<Variable>, value: Expression) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}

/// `if condition then_branch else else_branch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional<Op> {
    pub condition: Expression,
    pub then_branch: Sequence<Op>,
    pub else_branch: Sequence<Op>,
}

impl<Op> Conditional<Op> {
    pub fn new(
        condition: Expression,
        then_branch: impl Into<Sequence<Op>>,
        else_branch: impl Into<Sequence<Op>>,
    ) -> Self {
        Self {
            condition,
            then_branch: then_branch.into(),
            else_branch: else_branch.into(),
        }
    }
}

/// `while condition body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileLoop<Op> {
    pub condition: Expression,
    pub body: Sequence<Op>,
}

impl<Op> WhileLoop<Op> {
    pub fn new(condition: Expression, body: impl Into<Sequence<Op>>) -> Self {
        Self {
            condition,
            body: body.into(),
        }
    }
}
