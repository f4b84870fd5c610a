//! Validation report model

use crate::errors::Result;
use crate::features::escape_analysis::domain::EscapeSummary;
use serde::{Deserialize, Serialize};

/// Structural facts gathered while validating a program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Operations at any depth (containers excluded)
    pub operations: usize,

    /// Deepest region nesting reached (0 for a flat program)
    pub max_depth: usize,

    pub escape: EscapeSummary,
}

impl ValidationReport {
    pub fn loops(&self) -> usize {
        self.escape.loops
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
