//! Structural validation settings

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_nesting_depth`
pub const NESTING_DEPTH_CEILING: usize = 4096;

/// Settings for `ProgramValidator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Deepest allowed region nesting (0 = flat program)
    pub max_nesting_depth: usize,

    /// Accept programs whose top level can reach a break
    pub allow_stray_break: bool,
}

impl ValidationConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Strict => Self {
                max_nesting_depth: 64,
                allow_stray_break: false,
            },
            Preset::Permissive => Self {
                max_nesting_depth: 1024,
                allow_stray_break: true,
            },
        }
    }

    /// Builder: Set max_nesting_depth
    pub fn max_nesting_depth(mut self, v: usize) -> Self {
        self.max_nesting_depth = v;
        self
    }

    /// Builder: Set allow_stray_break
    pub fn allow_stray_break(mut self, v: bool) -> Self {
        self.allow_stray_break = v;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_nesting_depth == 0 || self.max_nesting_depth > NESTING_DEPTH_CEILING {
            return Err(ConfigError::range_with_hint(
                "max_nesting_depth",
                self.max_nesting_depth,
                1,
                NESTING_DEPTH_CEILING,
                "Nesting depth bounds recursion in every structural query",
            ));
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for ValidationConfig {
    fn validate(&self) -> ConfigResult<()> {
        ValidationConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "ValidationConfig"
    }
}
