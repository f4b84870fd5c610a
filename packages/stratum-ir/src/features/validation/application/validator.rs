//! Structural validation of programs
//!
//! Usage:
//! ```text
//! let config = AnalysisConfig::preset(Preset::Strict);
//! let report = ProgramValidator::from_config(config)?.validate(&program)?;
//! ```

use crate::config::{AnalysisConfig, ValidationConfig};
use crate::errors::{IrError, Result};
use crate::features::escape_analysis::application::summarize;
use crate::features::operation::domain::Program;
use crate::features::operation::ports::Operation;
use crate::features::validation::domain::ValidationReport;
use tracing::{debug, trace};

/// Checks a program against nesting and stray-break limits
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramValidator {
    config: ValidationConfig,
}

impl ProgramValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Build the validator from a full analysis configuration
    ///
    /// # Errors
    /// `IrError::Config` when the configuration overrides are out of range
    pub fn from_config(config: AnalysisConfig) -> Result<Self> {
        let config = config.build()?;
        Ok(Self::new(config.validation_config()))
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Walk `program` once and report its structure
    ///
    /// # Errors
    /// - `IrError::NestingTooDeep` when a region sits deeper than
    ///   `max_nesting_depth`
    /// - `IrError::StrayBreak` when a break is reachable outside every loop
    ///   and `allow_stray_break` is off
    pub fn validate<Op: Operation>(&self, program: &Program<Op>) -> Result<ValidationReport> {
        let limit = self.config.max_nesting_depth;
        let mut report = ValidationReport::default();

        for located in program.operations() {
            let depth = located.depth();
            trace!("{} at depth {}", located.op.kind_name(), depth);

            if depth > limit {
                return Err(IrError::NestingTooDeep { depth, limit });
            }
            report.operations += 1;
            report.max_depth = report.max_depth.max(depth);
        }

        report.escape = summarize(program);
        if report.escape.escapes && !self.config.allow_stray_break {
            return Err(IrError::StrayBreak);
        }

        debug!(
            "Validated {} operations (max depth {}, {} loops)",
            report.operations,
            report.max_depth,
            report.loops()
        );
        Ok(report)
    }
}
