//! Shared models

pub mod expression;
mod point;

pub use expression::{
    arithmetic, constant, relational, variable, ArithmeticKind, Expression, Literal, Predicate,
    Variable,
};
pub use point::{PointMap, PointRole, PointSet, ProgramPoint};
