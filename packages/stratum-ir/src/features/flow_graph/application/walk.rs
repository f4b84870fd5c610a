//! Context-carrying traversal
//!
//! Every successor query needs the operation's context. Walking the tree
//! with [`Operations`] hands it out alongside each operation, so analyses
//! never rebuild it by hand.

use crate::features::flow_graph::domain::Context;
use crate::features::flow_graph::infrastructure::{entry, successor};
use crate::features::operation::domain::Program;
use crate::features::operation::ports::{Operation, OperationExt};
use crate::shared::models::ProgramPoint;
use std::ops::ControlFlow;
use tracing::trace;

/// An operation together with where it sits
pub struct Located<'a, Op> {
    pub op: &'a Op,
    pub context: Context<'a, Op>,
    /// Position of `op` in `context.sequence()`
    pub index: usize,
}

impl<'a, Op: Operation> Located<'a, Op> {
    pub fn entry(&self) -> ProgramPoint<'a> {
        entry(self.op)
    }

    /// Fall-through successor, same as `exit_of(&self.context, self.op)`
    pub fn exit(&self) -> Option<ProgramPoint<'a>> {
        successor(&self.context, self.op, self.index)
    }

    pub fn depth(&self) -> usize {
        self.context.depth()
    }
}

/// Lazy pre-order iterator over all operations of a program
///
/// An operation is yielded before the contents of its regions; regions are
/// visited in order (then before else).
pub struct Operations<'a, Op> {
    stack: Vec<(Context<'a, Op>, usize)>,
}

impl<'a, Op: Operation> Operations<'a, Op> {
    pub fn new(root: Context<'a, Op>) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a, Op: Operation> Iterator for Operations<'a, Op> {
    type Item = Located<'a, Op>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (context, cursor) = self.stack.last_mut()?;
            let index = *cursor;
            let Some(op) = context.sequence().get(index) else {
                self.stack.pop();
                continue;
            };
            *cursor += 1;
            let context = context.clone();

            for region in op.regions().rev() {
                self.stack.push((context.descend(index, region), 0));
            }
            return Some(Located { op, context, index });
        }
    }
}

/// Calls `f` on every operation in pre-order until it breaks
pub fn visit<'a, Op, B, F>(program: &'a Program<Op>, mut f: F) -> ControlFlow<B>
where
    Op: Operation,
    F: FnMut(&Context<'a, Op>, &'a Op) -> ControlFlow<B>,
{
    let mut visited = 0usize;
    for located in program.operations() {
        visited += 1;
        if let ControlFlow::Break(value) = f(&located.context, located.op) {
            trace!(
                "Visit stopped at {} after {} operations",
                located.op.kind_name(),
                visited
            );
            return ControlFlow::Break(value);
        }
    }
    trace!("Visited all {} operations", visited);
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dialect::imp;
    use crate::features::flow_graph::infrastructure::exit_of;
    use crate::shared::models::{constant, variable, Expression};

    fn sample() -> imp::Program {
        imp::program(vec![
            imp::assign("x", constant(1u64)),
            imp::conditional(
                Expression::eq(variable("x"), constant(1u64)),
                vec![imp::skip()],
                vec![imp::scope(vec![imp::break_iteration()])],
            ),
            imp::while_loop(
                Expression::lt(variable("x"), constant(3u64)),
                vec![imp::assign("x", Expression::add(variable("x"), constant(1u64)))],
            ),
        ])
    }

    #[test]
    fn test_preorder() {
        let program = sample();
        let kinds: Vec<_> = program.operations().map(|l| l.op.kind_name()).collect();
        assert_eq!(
            kinds,
            vec![
                "assign",
                "conditional",
                "skip",
                "scope",
                "break_iteration",
                "while_loop",
                "assign"
            ]
        );
    }

    #[test]
    fn test_located_exit_matches_exit_of() {
        let program = sample();
        for located in program.operations() {
            assert_eq!(located.exit(), exit_of(&located.context, located.op));
        }
    }

    #[test]
    fn test_depths() {
        let program = sample();
        let depths: Vec<_> = program.operations().map(|l| l.depth()).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2, 0, 1]);
    }

    #[test]
    fn test_visit_stops_early() {
        let program = sample();
        let mut seen = 0;
        let found = visit(&program, |_, op| {
            seen += 1;
            if op.kind_name() == "skip" {
                ControlFlow::Break(seen)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(found, ControlFlow::Break(3));
        assert_eq!(seen, 3);
    }
}
