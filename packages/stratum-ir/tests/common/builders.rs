//! Test data builders
//!
//! Fluent construction of imp programs for tests that read better
//! top-down than as nested calls.

use stratum_ir::dialect::imp;
use stratum_ir::shared::models::{constant, Expression};

/// Builder for imp sequences
#[derive(Debug, Default)]
pub struct ImpBuilder {
    ops: Vec<imp::Op>,
}

impl ImpBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_op(mut self, op: imp::Op) -> Self {
        self.ops.push(op);
        self
    }

    pub fn skip(self) -> Self {
        self.with_op(imp::skip())
    }

    /// `target = value` with an unsigned constant
    pub fn assign(self, target: &str, value: u64) -> Self {
        self.with_op(imp::assign(target, constant(value)))
    }

    pub fn terminate(self) -> Self {
        self.with_op(imp::terminate())
    }

    pub fn break_iteration(self) -> Self {
        self.with_op(imp::break_iteration())
    }

    pub fn scope(self, body: impl FnOnce(ImpBuilder) -> ImpBuilder) -> Self {
        let inner = body(ImpBuilder::new()).into_sequence();
        self.with_op(imp::scope(inner))
    }

    pub fn while_loop(self, condition: Expression, body: impl FnOnce(ImpBuilder) -> ImpBuilder) -> Self {
        let inner = body(ImpBuilder::new()).into_sequence();
        self.with_op(imp::while_loop(condition, inner))
    }

    pub fn conditional(
        self,
        condition: Expression,
        then_branch: impl FnOnce(ImpBuilder) -> ImpBuilder,
        else_branch: impl FnOnce(ImpBuilder) -> ImpBuilder,
    ) -> Self {
        let then_ops = then_branch(ImpBuilder::new()).into_sequence();
        let else_ops = else_branch(ImpBuilder::new()).into_sequence();
        self.with_op(imp::conditional(condition, then_ops, else_ops))
    }

    pub fn into_sequence(self) -> imp::Sequence {
        imp::Sequence::from(self.ops)
    }

    pub fn build(self) -> imp::Program {
        imp::program(self.ops)
    }
}
