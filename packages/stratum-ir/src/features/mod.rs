//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains some of:
//! - domain/         - Pure models
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Algorithms over the ports

pub mod dialect;
pub mod escape_analysis;
pub mod flow_graph;
pub mod operation;
pub mod validation;
