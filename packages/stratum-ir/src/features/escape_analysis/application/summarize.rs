//! Whole-program escape summary

use crate::features::escape_analysis::domain::EscapeSummary;
use crate::features::escape_analysis::infrastructure::sequence_escapes;
use crate::features::operation::domain::{Container, Program};
use crate::features::operation::ports::{Operation, Structure};
use tracing::debug;

/// Single walk over `program` counting loops and the breaks they absorb
pub fn summarize<Op: Operation>(program: &Program<Op>) -> EscapeSummary {
    let mut summary = EscapeSummary {
        escapes: program.escape(),
        ..EscapeSummary::default()
    };

    for located in program.operations() {
        if let Structure::Loop { body } = located.op.structure() {
            summary.loops += 1;
            if sequence_escapes(body) {
                summary.absorbing_loops += 1;
            }
        }
    }

    debug!(
        "Escape summary: {} loops ({} absorbing), stray break: {}",
        summary.loops, summary.absorbing_loops, summary.escapes
    );
    summary
}
