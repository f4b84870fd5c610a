//! Query context for structural successors
//!
//! The tree has no parent pointers, so "what follows this sequence" is
//! carried by the context instead: the root sequence plus one frame per
//! region entered on the way down (which element owns the region, and the
//! region itself). Frames are only references and indices; cloning a
//! context is cheap and never touches the tree.

use crate::errors::{IrError, Result};
use crate::features::flow_graph::infrastructure::entry;
use crate::features::operation::domain::Sequence;
use crate::features::operation::ports::{Operation, OperationExt};
use crate::shared::models::ProgramPoint;
use std::fmt;

struct Frame<'a, Op> {
    /// Index of the owning operation in the enclosing sequence
    owner: usize,
    region: &'a Sequence<Op>,
}

impl<'a, Op> Clone for Frame<'a, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, Op> Copy for Frame<'a, Op> {}

/// Nearest enclosing sequence of an operation, with its ancestry
pub struct Context<'a, Op> {
    root: &'a Sequence<Op>,
    frames: Vec<Frame<'a, Op>>,
}

impl<'a, Op> Clone for Context<'a, Op> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            frames: self.frames.clone(),
        }
    }
}

impl<'a, Op: Operation> Context<'a, Op> {
    /// Context of the outermost sequence (the program body)
    pub fn root(sequence: &'a Sequence<Op>) -> Self {
        Self {
            root: sequence,
            frames: Vec::new(),
        }
    }

    /// The sequence whose elements this context answers for
    pub fn sequence(&self) -> &'a Sequence<Op> {
        self.sequence_at(self.frames.len())
    }

    pub fn root_sequence(&self) -> &'a Sequence<Op> {
        self.root
    }

    /// Number of regions between the root and this sequence
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_root(&self) -> bool {
        self.frames.is_empty()
    }

    /// Operation owning this sequence (`None` at the root)
    pub fn owner(&self) -> Option<&'a Op> {
        let level = self.frames.len().checked_sub(1)?;
        Some(&self.sequence_at(level)[self.frames[level].owner])
    }

    /// Context of the sequence containing `owner()`
    pub fn parent(&self) -> Option<Self> {
        let level = self.frames.len().checked_sub(1)?;
        Some(self.truncated(level))
    }

    /// Position of `op` (by identity) in this sequence
    pub fn index_of(&self, op: &Op) -> Option<usize> {
        self.sequence().position_of(op)
    }

    /// Context of `region`, one of the regions of `owner`
    ///
    /// # Panics
    /// If `owner` is not an element of this sequence, or `region` is not one
    /// of its regions.
    pub fn enter(&self, owner: &'a Op, region: &'a Sequence<Op>) -> Self {
        match self.try_enter(owner, region) {
            Ok(context) => context,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_enter(&self, owner: &'a Op, region: &'a Sequence<Op>) -> Result<Self> {
        let index = self.index_of(owner).ok_or(IrError::NotInContext {
            kind: owner.kind_name(),
        })?;
        if !owner.regions().any(|candidate| std::ptr::eq(candidate, region)) {
            return Err(IrError::NotARegion {
                kind: owner.kind_name(),
            });
        }
        Ok(self.descend(index, region))
    }

    /// Point reached after the whole sequence completes by fall-through
    ///
    /// At the root this is the post-program point. Nested sequences bubble
    /// to the successor of their owner; for a loop body that is the point
    /// after the loop (the back-edge is not encoded here).
    pub fn exit(&self) -> ProgramPoint<'a> {
        match self.frames.last() {
            None => ProgramPoint::exit_of(self.root),
            Some(frame) => self.successor_at(self.frames.len() - 1, frame.owner),
        }
    }

    /// Innermost loop owning this sequence or one of its ancestors
    pub fn enclosing_loop(&self) -> Option<(Self, &'a Op)> {
        let (level, owner) = self.innermost_loop()?;
        Some((self.truncated(level), &self.sequence_at(level)[owner]))
    }

    pub(crate) fn descend(&self, owner: usize, region: &'a Sequence<Op>) -> Self {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        frames.extend_from_slice(&self.frames);
        frames.push(Frame { owner, region });
        Self {
            root: self.root,
            frames,
        }
    }

    /// Fall-through successor of element `index` of the sequence at `level`
    pub(crate) fn successor_at(&self, mut level: usize, mut index: usize) -> ProgramPoint<'a> {
        loop {
            let sequence = self.sequence_at(level);
            if let Some(next) = sequence.get(index + 1) {
                return entry(next);
            }
            if level == 0 {
                return ProgramPoint::exit_of(sequence);
            }
            level -= 1;
            index = self.frames[level].owner;
        }
    }

    /// (level, index) of the innermost loop among the frame owners
    pub(crate) fn innermost_loop(&self) -> Option<(usize, usize)> {
        (0..self.frames.len()).rev().find_map(|level| {
            let owner = self.frames[level].owner;
            let op = &self.sequence_at(level)[owner];
            op.structure().is_loop().then_some((level, owner))
        })
    }

    fn sequence_at(&self, level: usize) -> &'a Sequence<Op> {
        if level == 0 {
            self.root
        } else {
            self.frames[level - 1].region
        }
    }

    fn truncated(&self, level: usize) -> Self {
        Self {
            root: self.root,
            frames: self.frames[..level].to_vec(),
        }
    }
}

impl<'a, Op> fmt::Debug for Context<'a, Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<usize> = self.frames.iter().map(|frame| frame.owner).collect();
        f.debug_struct("Context")
            .field("depth", &self.frames.len())
            .field("path", &path)
            .finish()
    }
}
