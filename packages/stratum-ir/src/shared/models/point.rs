//! Program points
//!
//! A point is the identity of a control-flow location. It is derived from the
//! node that owns it (an operation's own entry, or a sequence's synthetic
//! post-point), so equality is structural identity rather than an assigned
//! serial number. No numbering pass is needed.
//!
//! The lifetime ties a point to the borrowed program: a point can never
//! outlive the tree it was taken from, which keeps address identity sound.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::marker::PhantomData;

/// Which location of the owning node a point denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointRole {
    /// Point owned by an operation: "execute this operation here"
    Entry,
    /// Synthetic point after a sequence (post-program point for the root)
    Exit,
}

impl PointRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PointRole::Entry => "entry",
            PointRole::Exit => "exit",
        }
    }
}

/// Opaque, comparable control-flow location
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramPoint<'a> {
    owner: usize,
    role: PointRole,
    _tree: PhantomData<&'a ()>,
}

impl<'a> ProgramPoint<'a> {
    /// Point owned by `node` itself
    pub(crate) fn entry_of<T>(node: &'a T) -> Self {
        Self::new(node, PointRole::Entry)
    }

    /// Synthetic point following `node`
    pub(crate) fn exit_of<T>(node: &'a T) -> Self {
        Self::new(node, PointRole::Exit)
    }

    fn new<T>(node: &'a T, role: PointRole) -> Self {
        Self {
            owner: node as *const T as usize,
            role,
            _tree: PhantomData,
        }
    }

    pub fn role(&self) -> PointRole {
        self.role
    }

    pub fn is_entry(&self) -> bool {
        self.role == PointRole::Entry
    }

    pub fn is_exit(&self) -> bool {
        self.role == PointRole::Exit
    }
}

impl fmt::Debug for ProgramPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.role.as_str(), self.owner)
    }
}

/// Analysis state keyed by program point
pub type PointMap<'a, V> = FxHashMap<ProgramPoint<'a>, V>;

/// Set of program points
pub type PointSet<'a> = FxHashSet<ProgramPoint<'a>>;
