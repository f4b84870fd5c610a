/*
 * Stratum IR - Dialect-based IR for small imperative languages
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Expression, ProgramPoint)
 * - features/    : Vertical slices (operation → dialect → flow_graph → escape_analysis → validation)
 * - config/      : Presets, overrides and YAML I/O
 *
 * Structural algorithms are written once against the `Operation` contract;
 * a dialect only declares its operation union.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system (RFC-001 style presets)
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{IrError, Result};
pub use features::dialect::{self, Dialect, Printable};
pub use features::escape_analysis::{escape, sequence_escapes, summarize, EscapeSummary};
pub use features::flow_graph::{
    break_target, entry, exit, exit_of, loop_header, sequence_entry, try_exit_of, visit, Context,
    Located, Operations,
};
pub use features::operation::{
    Container, Kind, Operation, OperationExt, Program, Scope, Sequence, Structure,
};
pub use features::validation::{ProgramValidator, ValidationReport};
pub use shared::models::{Expression, PointMap, PointRole, PointSet, ProgramPoint};

/// Everything needed to build programs and query their flow points
pub mod prelude {
    pub use crate::config::{AnalysisConfig, Preset, ValidationConfig};
    pub use crate::errors::{IrError, Result};
    pub use crate::features::dialect::{Dialect, Printable};
    pub use crate::features::escape_analysis::{escape, sequence_escapes, EscapeSummary};
    pub use crate::features::flow_graph::{
        break_target, entry, exit, exit_of, loop_header, try_exit_of, visit, Context, Located,
    };
    pub use crate::features::operation::{Container, Kind, Operation, OperationExt, Structure};
    pub use crate::features::validation::{ProgramValidator, ValidationReport};
    pub use crate::shared::models::{
        arithmetic, constant, relational, variable, ArithmeticKind, Expression, Literal,
        PointMap, PointRole, PointSet, Predicate, ProgramPoint, Variable,
    };
}
