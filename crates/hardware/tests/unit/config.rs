//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading and validation.

use std::io::Write;

use ppcsim_core::config::{Config, ConfigError, FpuConfig, HostEnvKind, ProcessorModel};
use ppcsim_core::core::arch::fpscr;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.fpu.model, ProcessorModel::Mpc603e);
    assert_eq!(config.fpu.initial_fpscr, 0);
    assert_eq!(config.fpu.host_env, HostEnvKind::Native);
    assert!(config.validate().is_ok());
}

#[test]
fn test_fpu_config_defaults() {
    let fpu = FpuConfig::default();
    assert_eq!(fpu.model, ProcessorModel::Mpc603e);
    assert_eq!(fpu.initial_fpscr, 0);
    assert_eq!(fpu.host_env, HostEnvKind::Native);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.fpu.model, ProcessorModel::Mpc603e);
}

#[test]
fn test_partial_fpu_section() {
    let config = Config::from_json(r#"{ "fpu": { "initial_fpscr": 2 } }"#).unwrap();
    assert_eq!(config.fpu.initial_fpscr, 2);
    assert_eq!(config.fpu.model, ProcessorModel::Mpc603e);
    assert_eq!(config.fpu.host_env, HostEnvKind::Native);
}

#[rstest]
#[case("\"Mpc601\"", ProcessorModel::Mpc601)]
#[case("\"601\"", ProcessorModel::Mpc601)]
#[case("\"Mpc603e\"", ProcessorModel::Mpc603e)]
#[case("\"603e\"", ProcessorModel::Mpc603e)]
fn test_model_names(#[case] name: &str, #[case] expected: ProcessorModel) {
    let json = format!(r#"{{ "fpu": {{ "model": {name} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().fpu.model, expected);
}

#[test]
fn test_unknown_model_is_parse_error() {
    let err = Config::from_json(r#"{ "fpu": { "model": "G4" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Config::from_json("{ fpu: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[rstest]
#[case::reserved(fpscr::RESERVED)]
#[case::fex(fpscr::FEX)]
#[case::fex_with_cause(fpscr::FEX | fpscr::VXCVI | fpscr::VE)]
fn test_rejects_impossible_reset_fpscr(#[case] bits: u32) {
    let json = format!(r#"{{ "fpu": {{ "initial_fpscr": {bits} }} }}"#);
    let err = Config::from_json(&json).unwrap_err();
    match err {
        ConfigError::Invalid { field, reason } => {
            assert_eq!(field, "fpu.initial_fpscr");
            assert!(!reason.is_empty());
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_accepts_causes_and_enables() {
    let bits = fpscr::VXCVI | fpscr::VX | fpscr::VE | 0b11;
    let json = format!(r#"{{ "fpu": {{ "initial_fpscr": {bits} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().fpu.initial_fpscr, bits);
}

#[test]
fn test_error_messages() {
    let err = Config::from_json(r#"{ "fpu": { "initial_fpscr": 2048 } }"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("fpu.initial_fpscr"), "{msg}");
    assert!(msg.contains("0x00000800"), "{msg}");
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "trace_instructions": true }}, "fpu": {{ "host_env": "Detached" }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.fpu.host_env, HostEnvKind::Detached);
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
