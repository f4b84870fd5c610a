//! Operation capability contract
//!
//! Every dialect is a closed sum type of operation kinds. The structural
//! algorithms (entry points, successors, escape) are written once against
//! this contract; a dialect only describes the shape of each of its kinds.

use crate::errors::{IrError, Result};
use crate::features::escape_analysis::infrastructure::escape;
use crate::features::flow_graph::infrastructure::entry;
use crate::features::operation::domain::Sequence;
use crate::shared::models::ProgramPoint;
use std::iter::Flatten;

/// Structural shape of one operation
///
/// This is all the generic algorithms need to know about a kind.
#[derive(Debug)]
pub enum Structure<'a, Op> {
    /// No internal control split, falls through (skip, assign)
    Atomic,

    /// Ends the program; never falls through
    Terminate,

    /// Unwinds to the innermost enclosing loop and resumes after it
    Break,

    /// Guarded two-way split whose bodies merge afterwards
    Branch {
        then_body: &'a Sequence<Op>,
        else_body: &'a Sequence<Op>,
    },

    /// Guarded repetition of its body
    Loop { body: &'a Sequence<Op> },

    /// Pure grouping; entry and escape forward to the body
    Transparent { body: &'a Sequence<Op> },
}

impl<'a, Op> Clone for Structure<'a, Op> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, Op> Copy for Structure<'a, Op> {}

/// Nested sequences of an operation, in execution order
pub type Regions<'a, Op> = Flatten<std::array::IntoIter<Option<&'a Sequence<Op>>, 2>>;

impl<'a, Op> Structure<'a, Op> {
    /// Whether the operation completes by normal fall-through
    pub fn falls_through(&self) -> bool {
        !matches!(self, Structure::Terminate | Structure::Break)
    }

    /// Whether the operation owns its entry point (everything but grouping)
    pub fn owns_entry(&self) -> bool {
        !matches!(self, Structure::Transparent { .. })
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, Structure::Loop { .. })
    }

    pub fn regions(&self) -> Regions<'a, Op> {
        let slots = match *self {
            Structure::Branch {
                then_body,
                else_body,
            } => [Some(then_body), Some(else_body)],
            Structure::Loop { body } | Structure::Transparent { body } => [Some(body), None],
            Structure::Atomic | Structure::Terminate | Structure::Break => [None, None],
        };
        slots.into_iter().flatten()
    }
}

/// Interface every dialect's operation union satisfies
pub trait Operation: Sized {
    /// Shape of the current variant
    fn structure(&self) -> Structure<'_, Self>;

    /// Name of the current variant's kind
    fn kind_name(&self) -> &'static str;
}

/// A concrete kind of the `Op` union
pub trait Kind<Op>: Sized {
    const NAME: &'static str;

    /// Payload of `op` if it currently holds this kind
    fn narrow(op: &Op) -> Option<&Self>;
}

/// Queries available on every operation
pub trait OperationExt: Operation {
    /// Whether this operation currently holds kind `K`
    fn isa<K: Kind<Self>>(&self) -> bool {
        K::narrow(self).is_some()
    }

    /// Payload of kind `K`, if held
    fn dyn_cast<K: Kind<Self>>(&self) -> Option<&K> {
        K::narrow(self)
    }

    /// Payload of kind `K`, or `IrError::KindMismatch`
    fn try_unwrap<K: Kind<Self>>(&self) -> Result<&K> {
        K::narrow(self).ok_or(IrError::KindMismatch {
            expected: K::NAME,
            found: self.kind_name(),
        })
    }

    /// Payload of kind `K`
    ///
    /// # Panics
    /// If the operation does not hold `K`. Guard with [`OperationExt::isa`].
    fn unwrap<K: Kind<Self>>(&self) -> &K {
        match self.try_unwrap::<K>() {
            Ok(kind) => kind,
            Err(err) => panic!("{}", err),
        }
    }

    /// This operation's entry point
    fn entry(&self) -> ProgramPoint<'_> {
        entry(self)
    }

    /// Whether a break reachable in this operation targets an enclosing loop
    fn escape(&self) -> bool {
        escape(self)
    }

    fn falls_through(&self) -> bool {
        self.structure().falls_through()
    }

    fn regions(&self) -> Regions<'_, Self> {
        self.structure().regions()
    }
}

impl<T: Operation> OperationExt for T {}

/// Compile-time capability check for operation unions
pub const fn assert_operation<T: Operation>() {}

/// Compile-time capability check for kinds of a union
pub const fn assert_kind<K: Kind<Op>, Op: Operation>() {}

/// Compile-time check that a model type can be shared across threads
pub const fn assert_send_sync<T: Send + Sync>() {}
