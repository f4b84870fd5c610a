//! Operation domain model: shared kinds and containers

pub mod container;
pub mod kinds;

pub use container::{Container, Program, Scope, Sequence};
pub use kinds::{Assign, Conditional, Skip, Terminate, WhileLoop};
