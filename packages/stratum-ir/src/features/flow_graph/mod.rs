//! Flow-point algebra
//!
//! - domain/         - `Context`, the enclosing-sequence chain used for successors
//! - infrastructure/ - entry/exit computations over the `Operation` contract
//! - application/    - context-carrying traversal
//!
//! No explicit edge list is materialized; every edge is derivable from
//! `entry` and `exit_of`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{visit, Located, Operations};
pub use domain::Context;
pub use infrastructure::{
    break_target, entry, exit, exit_of, loop_header, sequence_entry, try_exit_of,
};
