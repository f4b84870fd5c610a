//! Analysis configuration
//!
//! Three levels, from simple to complete:
//! - Level 1: Preset - one-liner defaults
//! - Level 2: Override - closure-based adjustment of a section
//! - Level 3: YAML - versioned schema file
//!
//! # Examples
//!
//! ```rust,ignore
//! use stratum_ir::config::{AnalysisConfig, Preset};
//!
//! // Level 1
//! let config = AnalysisConfig::preset(Preset::Strict).build()?;
//!
//! // Level 2
//! let config = AnalysisConfig::preset(Preset::Strict)
//!     .validation(|c| c.max_nesting_depth(16))
//!     .build()?;
//!
//! // Level 3
//! let config = AnalysisConfig::from_yaml("analysis.yaml")?;
//! ```

pub mod analysis_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;
pub mod validation_config;

// Re-exports
pub use analysis_config::AnalysisConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use validation::{Validatable, ValidatableCollection};
pub use validation_config::ValidationConfig;

/// Supported YAML schema versions
pub const SUPPORTED_SCHEMA_VERSIONS: &[u32] = &[1];
