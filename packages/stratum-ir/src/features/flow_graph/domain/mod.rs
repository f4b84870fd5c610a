//! Flow-graph domain: successor query contexts

pub mod context;

pub use context::Context;
