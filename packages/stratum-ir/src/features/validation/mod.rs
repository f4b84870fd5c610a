//! Structural validation
//!
//! Rejects programs nested deeper than the configured limit and, under the
//! strict preset, programs with a break reachable outside every loop.

pub mod application;
pub mod domain;

pub use application::ProgramValidator;
pub use domain::ValidationReport;
