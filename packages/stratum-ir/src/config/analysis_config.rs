//! Top-level analysis configuration

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use super::validation::{Validatable, ValidatableCollection};
use super::validation_config::ValidationConfig;
use super::SUPPORTED_SCHEMA_VERSIONS;

/// Analysis configuration (preset + per-section overrides)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    preset: Preset,
    validation: Option<ValidationConfig>,
}

impl AnalysisConfig {
    /// Level 1: Create from preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            validation: None,
        }
    }

    /// Level 2: Override validation settings (Rust closure convenience)
    pub fn validation<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ValidationConfig) -> ValidationConfig,
    {
        let base = self.validation_config();
        self.validation = Some(f(base));
        self
    }

    /// Validate and return the final configuration
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Level 3: Load from a YAML file
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Level 3: Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_SCHEMA_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_SCHEMA_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            config.validation = overrides.validation;
        }

        config.build()
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.as_str().to_string(),
            overrides: self.validation.map(|validation| ConfigOverrides {
                validation: Some(validation),
            }),
        };
        Ok(serde_yaml::to_string(&export)?)
    }

    pub fn preset_kind(&self) -> Preset {
        self.preset
    }

    /// Effective validation settings (override or preset default)
    pub fn validation_config(&self) -> ValidationConfig {
        self.validation
            .unwrap_or_else(|| ValidationConfig::from_preset(self.preset))
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl Validatable for AnalysisConfig {
    /// Preset defaults are valid by construction; only overrides are checked
    fn validate(&self) -> ConfigResult<()> {
        self.validation.validate_all()
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}
