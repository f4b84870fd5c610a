//! Core dialect
//!
//! The minimal language: assignments, two-way branches, while loops, an
//! early loop exit (`break_loop`) and program termination.

use super::{operation_kinds, Dialect, Printable};
use crate::features::operation::domain::{container, kinds};
use crate::features::operation::ports::{Operation, Structure};
use crate::shared::models::{Expression, Variable};
use serde::{Deserialize, Serialize};

pub use crate::features::operation::domain::{Assign, Skip, Terminate};

/// Leaves the innermost enclosing loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreakLoop;

pub type Conditional = kinds::Conditional<Op>;
pub type WhileLoop = kinds::WhileLoop<Op>;
pub type Sequence = container::Sequence<Op>;
pub type Program = container::Program<Op>;

/// Core operation union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Skip(Skip),
    Assign(Assign),
    Conditional(Conditional),
    WhileLoop(WhileLoop),
    BreakLoop(BreakLoop),
    Terminate(Terminate),
}

operation_kinds!(Op {
    Skip(Skip) => "skip",
    Assign(Assign) => "assign",
    Conditional(Conditional) => "conditional",
    WhileLoop(WhileLoop) => "while_loop",
    BreakLoop(BreakLoop) => "break_loop",
    Terminate(Terminate) => "terminate",
});

impl Operation for Op {
    fn structure(&self) -> Structure<'_, Self> {
        match self {
            Op::Skip(_) | Op::Assign(_) => Structure::Atomic,
            Op::Conditional(conditional) => Structure::Branch {
                then_body: &conditional.then_branch,
                else_body: &conditional.else_branch,
            },
            Op::WhileLoop(while_loop) => Structure::Loop {
                body: &while_loop.body,
            },
            Op::BreakLoop(_) => Structure::Break,
            Op::Terminate(_) => Structure::Terminate,
        }
    }

    fn kind_name(&self) -> &'static str {
        self.name()
    }
}

impl Printable for Op {
    fn header(&self) -> String {
        match self {
            Op::Skip(_) => "skip".to_string(),
            Op::Assign(assign) => format!("{} = {}", assign.target, assign.value),
            Op::Conditional(conditional) => format!("if {}", conditional.condition),
            Op::WhileLoop(while_loop) => format!("while {}", while_loop.condition),
            Op::BreakLoop(_) => "break".to_string(),
            Op::Terminate(_) => "terminate".to_string(),
        }
    }
}

impl From<Op> for Sequence {
    fn from(op: Op) -> Self {
        Sequence::from(vec![op])
    }
}

/// Marker for the core dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreDialect;

impl Dialect for CoreDialect {
    const NAME: &'static str = "core";
    type Op = Op;
    const KINDS: &'static [&'static str] = Op::KINDS;
}

pub fn program(body: impl Into<Sequence>) -> Program {
    Program::new(body)
}

pub fn skip() -> Op {
    Op::Skip(Skip)
}

pub fn assign(target: impl Into<Variable>, value: Expression) -> Op {
    Op::Assign(Assign::new(target, value))
}

pub fn conditional(
    condition: Expression,
    then_branch: impl Into<Sequence>,
    else_branch: impl Into<Sequence>,
) -> Op {
    Op::Conditional(Conditional::new(condition, then_branch, else_branch))
}

pub fn while_loop(condition: Expression, body: impl Into<Sequence>) -> Op {
    Op::WhileLoop(WhileLoop::new(condition, body))
}

pub fn break_loop() -> Op {
    Op::BreakLoop(BreakLoop)
}

pub fn terminate() -> Op {
    Op::Terminate(Terminate)
}
