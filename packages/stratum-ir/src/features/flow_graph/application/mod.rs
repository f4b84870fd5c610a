//! Flow-graph traversal

pub mod walk;

pub use walk::{visit, Located, Operations};
