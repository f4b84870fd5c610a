//! Imp dialect
//!
//! Core kinds plus lexical scopes. The early loop exit is spelled
//! `break_iteration` here; it behaves exactly like core's `break_loop`.

use super::{operation_kinds, Dialect, Printable};
use crate::features::operation::domain::{container, kinds};
use crate::features::operation::ports::{Operation, Structure};
use crate::shared::models::{Expression, Variable};
use serde::{Deserialize, Serialize};

pub use crate::features::operation::domain::{Assign, Skip, Terminate};

/// Leaves the innermost enclosing loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreakIteration;

pub type Conditional = kinds::Conditional<Op>;
pub type WhileLoop = kinds::WhileLoop<Op>;
pub type Scope = container::Scope<Op>;
pub type Sequence = container::Sequence<Op>;
pub type Program = container::Program<Op>;

/// Imp operation union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Skip(Skip),
    Assign(Assign),
    Conditional(Conditional),
    WhileLoop(WhileLoop),
    BreakIteration(BreakIteration),
    Terminate(Terminate),
    Scope(Scope),
}

operation_kinds!(Op {
    Skip(Skip) => "skip",
    Assign(Assign) => "assign",
    Conditional(Conditional) => "conditional",
    WhileLoop(WhileLoop) => "while_loop",
    BreakIteration(BreakIteration) => "break_iteration",
    Terminate(Terminate) => "terminate",
    Scope(Scope) => "scope",
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
            Op::BreakIteration(_) => Structure::Break,
            Op::Terminate(_) => Structure::Terminate,
            Op::Scope(scope) => Structure::Transparent { body: &scope.body },
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
            Op::BreakIteration(_) => "break".to_string(),
            Op::Terminate(_) => "terminate".to_string(),
            Op::Scope(_) => "scope".to_string(),
        }
    }
}

impl From<Op> for Sequence {
    fn from(op: Op) -> Self {
        Sequence::from(vec![op])
    }
}

/// Marker for the imp dialect
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpDialect;

impl Dialect for ImpDialect {
    const NAME: &'static str = "imp";
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

pub fn break_iteration() -> Op {
    Op::BreakIteration(BreakIteration)
}

pub fn terminate() -> Op {
    Op::Terminate(Terminate)
}

pub fn scope(body: impl Into<Sequence>) -> Op {
    Op::Scope(Scope::new(body))
}
