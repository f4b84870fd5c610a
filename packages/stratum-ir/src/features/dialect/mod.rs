//! Dialect catalogs
//!
//! A dialect is one closed operation union plus its builders. The union
//! implements `Operation` by mapping each variant to a `Structure`; the
//! kind plumbing (`Kind` narrowing, `From` conversions, kind names) is
//! generated by [`operation_kinds!`].
//!
//! - core - skip, assign, conditional, while_loop, break_loop, terminate
//! - imp  - core kinds with break_iteration, plus scope

pub mod core;
pub mod imp;
pub mod printer;

use crate::features::operation::ports::Operation;

pub use printer::Printable;

/// A concrete language plugged into the shared algorithms
pub trait Dialect {
    const NAME: &'static str;

    /// The dialect's operation union
    type Op: Operation;

    /// Kind names, in declaration order
    const KINDS: &'static [&'static str];
}

/// Generates the kind plumbing of an operation union
///
/// Every variant must be a one-field tuple variant holding its payload.
macro_rules! operation_kinds {
    ($op:ident { $($variant:ident($kind:ty) => $name:literal),+ $(,)? }) => {
        impl $op {
            /// Kind names, in declaration order
            pub const KINDS: &'static [&'static str] = &[$($name),+];

            /// Name of the current variant's kind
            pub fn name(&self) -> &'static str {
                match self {
                    $($op::$variant(_) => $name,)+
                }
            }
        }

        $(
            impl $crate::features::operation::ports::Kind<$op> for $kind {
                const NAME: &'static str = $name;

                #[allow(unreachable_patterns)]
                fn narrow(op: &$op) -> Option<&Self> {
                    match op {
                        $op::$variant(kind) => Some(kind),
                        _ => None,
                    }
                }
            }

            impl From<$kind> for $op {
                fn from(kind: $kind) -> Self {
                    $op::$variant(kind)
                }
            }
        )+
    };
}

pub(crate) use operation_kinds;
