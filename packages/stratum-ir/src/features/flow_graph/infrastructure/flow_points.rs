//! Flow-point algebra
//!
//! Entry points come from the operation alone. Successors need the
//! enclosing sequence, so they go through a [`Context`].

use crate::errors::{IrError, Result};
use crate::features::flow_graph::domain::Context;
use crate::features::operation::domain::{Container, Sequence};
use crate::features::operation::ports::{Operation, OperationExt, Structure};
use crate::shared::models::ProgramPoint;

/// Point where control is before `op` executes
///
/// Grouping operations own no entry of their own and forward to their body.
pub fn entry<Op: Operation>(op: &Op) -> ProgramPoint<'_> {
    match op.structure() {
        Structure::Transparent { body } => sequence_entry(body),
        _ => ProgramPoint::entry_of(op),
    }
}

/// Entry of the first element, or the sequence's own post-point if empty
pub fn sequence_entry<Op: Operation>(sequence: &Sequence<Op>) -> ProgramPoint<'_> {
    match sequence.front() {
        Some(first) => entry(first),
        None => ProgramPoint::exit_of(sequence),
    }
}

/// Synthetic point after a container taken as the root
pub fn exit<C: Container>(container: &C) -> ProgramPoint<'_> {
    container.exit()
}

/// Point reached when `op` completes by fall-through
///
/// `None` for operations that never fall through (terminate, breaks). The
/// target of a break is [`break_target`].
///
/// # Panics
/// If `op` is not an element of `context`'s sequence.
pub fn exit_of<'a, Op: Operation>(context: &Context<'a, Op>, op: &'a Op) -> Option<ProgramPoint<'a>> {
    match try_exit_of(context, op) {
        Ok(point) => point,
        Err(err) => panic!("{}", err),
    }
}

/// [`exit_of`] reporting `IrError::NotInContext` instead of panicking
pub fn try_exit_of<'a, Op: Operation>(
    context: &Context<'a, Op>,
    op: &'a Op,
) -> Result<Option<ProgramPoint<'a>>> {
    let index = context.index_of(op).ok_or(IrError::NotInContext {
        kind: op.kind_name(),
    })?;
    Ok(successor(context, op, index))
}

/// Fall-through successor of the element at `index`
pub(crate) fn successor<'a, Op: Operation>(
    context: &Context<'a, Op>,
    op: &'a Op,
    index: usize,
) -> Option<ProgramPoint<'a>> {
    op.falls_through()
        .then(|| context.successor_at(context.depth(), index))
}

/// Where a break located in `context`'s sequence resumes
///
/// The point after the innermost enclosing loop, or `None` when no loop
/// encloses the sequence.
pub fn break_target<'a, Op: Operation>(context: &Context<'a, Op>) -> Option<ProgramPoint<'a>> {
    let (level, index) = context.innermost_loop()?;
    Some(context.successor_at(level, index))
}

/// Entry of the innermost loop enclosing `context`'s sequence
///
/// Loop bodies fall through past the loop; consumers that want the
/// back-edge add it from here.
pub fn loop_header<'a, Op: Operation>(context: &Context<'a, Op>) -> Option<ProgramPoint<'a>> {
    let (_, header) = context.enclosing_loop()?;
    Some(entry(header))
}
