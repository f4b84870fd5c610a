//! Configuration loading and program validation

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use stratum_ir::config::{AnalysisConfig, ConfigError, Preset};
use stratum_ir::features::validation::{ProgramValidator, ValidationReport};
use stratum_ir::shared::models::{constant, variable, Expression};
use stratum_ir::IrError;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_config_drives_validator() {
    init_tracing();
    let file = write_config(
        "version: 1\npreset: strict\noverrides:\n  validation:\n    max_nesting_depth: 1\n    allow_stray_break: true\n",
    );
    let config = AnalysisConfig::from_yaml(file.path().to_str().unwrap()).unwrap();
    let validator = ProgramValidator::new(config.validation_config());

    let shallow = ImpBuilder::new().scope(|s| s.break_iteration()).build();
    let report = validator.validate(&shallow).unwrap();
    assert_eq!(report.max_depth, 1);
    assert!(report.escape.escapes);

    let deep = ImpBuilder::new().scope(|s| s.scope(|s| s.skip())).build();
    assert!(matches!(
        validator.validate(&deep),
        Err(IrError::NestingTooDeep { depth: 2, limit: 1 })
    ));
}

#[test]
fn test_preset_only_config() {
    let file = write_config("version: 1\npreset: permissive\n");
    let config = AnalysisConfig::from_yaml(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.preset_kind(), Preset::Permissive);
    assert!(config.validation_config().allow_stray_break);
}

#[test]
fn test_invalid_config_file() {
    let file = write_config("version: 1\npreset: strict\noverrides:\n  validation:\n    max_nesting_depth: 0\n    allow_stray_break: false\n");
    let err = AnalysisConfig::from_yaml(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ConfigError::Range { .. }));

    let wrapped: IrError = err.into();
    assert!(wrapped.to_string().starts_with("Configuration error"));
}

#[test]
fn test_strict_rejects_stray_break() {
    let config = AnalysisConfig::preset(Preset::Strict).build().unwrap();
    let validator = ProgramValidator::new(config.validation_config());
    let program = fixture_nested_scope_break();
    assert!(matches!(validator.validate(&program), Err(IrError::StrayBreak)));
}

#[test]
fn test_report_for_nested_loops() {
    let validator = ProgramValidator::default();
    let report = validator.validate(&fixture_nested_loops()).unwrap();
    assert_eq!(report.operations, 3);
    assert_eq!(report.max_depth, 2);
    assert_eq!(report.loops(), 2);
    assert_eq!(report.escape.absorbing_loops, 1);

    let json = report.to_json().unwrap();
    let loaded: ValidationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_core_programs_validate() {
    let program = fixture_branch_then_assign();
    let report = ProgramValidator::default().validate(&program).unwrap();
    assert_eq!(report.operations, 4);
    assert_eq!(report.max_depth, 1);
    assert!(!report.escape.escapes);

    let guarded = stratum_ir::dialect::core::program(stratum_ir::dialect::core::while_loop(
        Expression::lt(variable("i"), constant(2u64)),
        stratum_ir::dialect::core::break_loop(),
    ));
    assert!(ProgramValidator::default().validate(&guarded).is_ok());
}
