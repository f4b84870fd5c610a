//! Sequencing containers
//!
//! `Sequence` is the ordered list every region is made of. `Program` (the
//! root) and `Scope` (a nested lexical group) wrap one and share its
//! structural semantics through the `Container` trait: both are transparent,
//! so their entry is their first element's entry.
//!
//! A container never computes its own successor. Only the enclosing context
//! knows what follows it; see `flow_graph::Context`.

use crate::features::escape_analysis::infrastructure::sequence_escapes;
use crate::features::flow_graph::application::Operations;
use crate::features::flow_graph::domain::Context;
use crate::features::flow_graph::infrastructure::sequence_entry;
use crate::features::operation::ports::Operation;
use crate::shared::models::ProgramPoint;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered list of operations; insertion order is execution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<Op> {
    ops: Vec<Op>,
}

impl<Op> Sequence<Op> {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn front(&self) -> Option<&Op> {
        self.ops.first()
    }

    pub fn back(&self) -> Option<&Op> {
        self.ops.last()
    }

    pub fn get(&self, index: usize) -> Option<&Op> {
        self.ops.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    pub fn as_slice(&self) -> &[Op] {
        &self.ops
    }

    /// Position of `op` by identity (not by value)
    pub fn position_of(&self, op: &Op) -> Option<usize> {
        self.ops.iter().position(|candidate| std::ptr::eq(candidate, op))
    }

    pub fn contains(&self, op: &Op) -> bool {
        self.position_of(op).is_some()
    }
}

impl<Op> Default for Sequence<Op> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op> Index<usize> for Sequence<Op> {
    type Output = Op;

    fn index(&self, index: usize) -> &Op {
        &self.ops[index]
    }
}

impl<Op> From<Vec<Op>> for Sequence<Op> {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl<Op> FromIterator<Op> for Sequence<Op> {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a, Op> IntoIterator for &'a Sequence<Op> {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Transparent sequencing container
pub trait Container {
    type Op: Operation;

    /// The sequence this container forwards to
    fn sequence(&self) -> &Sequence<Self::Op>;

    fn len(&self) -> usize {
        self.sequence().len()
    }

    fn is_empty(&self) -> bool {
        self.sequence().is_empty()
    }

    fn front(&self) -> Option<&Self::Op> {
        self.sequence().front()
    }

    fn back(&self) -> Option<&Self::Op> {
        self.sequence().back()
    }

    fn get(&self, index: usize) -> Option<&Self::Op> {
        self.sequence().get(index)
    }

    /// Entry of the first element, or the synthetic empty point
    fn entry(&self) -> ProgramPoint<'_> {
        sequence_entry(self.sequence())
    }

    /// Synthetic point after this container, taking it as the root
    ///
    /// For a nested container the real successor comes from its context
    /// (`Context::exit`).
    fn exit(&self) -> ProgramPoint<'_> {
        ProgramPoint::exit_of(self.sequence())
    }

    /// Whether any element can reach a break targeting an enclosing loop
    fn escape(&self) -> bool {
        sequence_escapes(self.sequence())
    }
}

impl<Op: Operation> Container for Sequence<Op> {
    type Op = Op;

    fn sequence(&self) -> &Sequence<Op> {
        self
    }
}

/// Root container; owns the whole tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program<Op> {
    body: Sequence<Op>,
}

impl<Op> Program<Op> {
    pub fn new(body: impl Into<Sequence<Op>>) -> Self {
        Self { body: body.into() }
    }

    pub fn empty() -> Self {
        Self {
            body: Sequence::new(),
        }
    }

    pub fn body(&self) -> &Sequence<Op> {
        &self.body
    }
}

impl<Op: Operation> Program<Op> {
    /// Context for querying successors of top-level operations
    pub fn context(&self) -> Context<'_, Op> {
        Context::root(&self.body)
    }

    /// Lazy pre-order walk over every operation with its context
    pub fn operations(&self) -> Operations<'_, Op> {
        Operations::new(self.context())
    }
}

impl<Op> Default for Program<Op> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Op> From<Vec<Op>> for Program<Op> {
    fn from(ops: Vec<Op>) -> Self {
        Self::new(ops)
    }
}

impl<Op> FromIterator<Op> for Program<Op> {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self {
            body: iter.into_iter().collect(),
        }
    }
}

impl<Op: Operation> Container for Program<Op> {
    type Op = Op;

    fn sequence(&self) -> &Sequence<Op> {
        &self.body
    }
}

/// Nested lexical grouping; no control-flow effect of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope<Op> {
    pub body: Sequence<Op>,
}

impl<Op> Scope<Op> {
    pub fn new(body: impl Into<Sequence<Op>>) -> Self {
        Self { body: body.into() }
    }
}

impl<Op: Operation> Container for Scope<Op> {
    type Op = Op;

    fn sequence(&self) -> &Sequence<Op> {
        &self.body
    }
}
