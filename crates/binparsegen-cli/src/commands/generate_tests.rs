use std::fs;

use indoc::formatdoc;

use super::generate::{GenerateArgs, render, run};

fn write_inputs(dir: &tempfile::TempDir, debug: bool) -> std::path::PathBuf {
    fs::write(
        dir.path().join("types.json"),
        r#"{"_HEADER": [8, {"Magic": [0, ["Signature", {"value": "BP"}]], "Length": [4, ["unsigned long"]]}]}"#,
    )
    .unwrap();
    let spec = formatdoc!(
        "
        Module: sample
        Profile: SampleProfile
        Filename: types.json
        GenerateDebugString: {}
        Structs:
          - _HEADER
        ",
        debug
    );
    let spec_path = dir.path().join("spec.yaml");
    fs::write(&spec_path, spec).unwrap();
    spec_path
}

fn args(spec_path: std::path::PathBuf) -> GenerateArgs {
    GenerateArgs {
        spec_path,
        output: None,
        debug_string: false,
        max_array_count: None,
        scan_window: None,
        runtime_crate: None,
    }
}

#[test]
fn schema_path_is_relative_to_spec() {
    let dir = tempfile::tempdir().unwrap();
    let code = render(&args(write_inputs(&dir, false))).unwrap();
    assert!(code.starts_with("// Code generated by binparsegen. DO NOT EDIT.\n// Module: sample\n"));
    assert!(code.contains("pub struct SampleProfile {"));
    assert!(code.contains("pub fn Magic(&self) -> Signature"));
    assert!(!code.contains("impl std::fmt::Display for HEADER"));
}

#[test]
fn debug_flag_overrides_spec() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = args(write_inputs(&dir, false));
    args.debug_string = true;
    let code = render(&args).unwrap();
    assert!(code.contains("impl std::fmt::Display for HEADER<'_>"));
}

#[test]
fn output_file_receives_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("profile.rs");
    let mut args = args(write_inputs(&dir, true));
    args.output = Some(out.clone());
    args.runtime_crate = Some("crate::rt".to_string());
    run(args).unwrap();

    let code = fs::read_to_string(out).unwrap();
    assert!(code.contains("use crate::rt::{ReaderAt, Structure};"));
}

#[test]
fn missing_spec_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = render(&args(dir.path().join("nope.yaml"))).unwrap_err();
    assert!(err.to_string().starts_with("failed to read "), "{err}");
    assert!(err.to_string().contains("nope.yaml"));
}
