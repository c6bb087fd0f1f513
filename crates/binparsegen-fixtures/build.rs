use std::path::PathBuf;

use binparsegen_compiler::{Config, generate_with_config};
use binparsegen_core::{ConversionSpec, VtypeSchema};

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let spec_path = PathBuf::from(&manifest_dir).join("schema/spec.yaml");

    let spec = ConversionSpec::load(&spec_path)
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", spec_path.display()));
    let schema = VtypeSchema::load(&spec.filename)
        .unwrap_or_else(|e| panic!("failed to load {}: {e}", spec.filename.display()));

    let code = generate_with_config(&spec, &schema, Config::from_spec(&spec))
        .unwrap_or_else(|e| panic!("failed to generate fixture profile: {e}"));

    let out_path = PathBuf::from(out_dir).join("registry.rs");
    std::fs::write(&out_path, code).expect("failed to write generated profile");

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={}", spec_path.display());
    println!("cargo::rerun-if-changed={}", spec.filename.display());
}
