//! Escape analysis
//!
//! Decides whether a construct can reach a break that targets a loop
//! enclosing it, without crossing a nested loop.
//!
//! - infrastructure/ - `escape` / `sequence_escapes` over the `Operation` contract
//! - domain/         - `EscapeSummary`
//! - application/    - whole-program summary

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::summarize;
pub use domain::EscapeSummary;
pub use infrastructure::{escape, sequence_escapes};
