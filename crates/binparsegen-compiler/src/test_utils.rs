//! Shared fixtures for compiler unit tests.

use binparsegen_core::{ConversionSpec, VtypeSchema};

use crate::Config;

/// A spec named `Test` selecting `structs`, with no field lists.
pub fn spec_selecting(structs: &[&str]) -> ConversionSpec {
    ConversionSpec {
        module: "test".to_string(),
        profile: "Test".to_string(),
        structs: structs.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn schema(value: serde_json::Value) -> VtypeSchema {
    VtypeSchema::from_value(value).expect("fixture schema should parse")
}

/// Generate with the conversion spec's own config, panicking on errors.
pub fn generate(spec: &ConversionSpec, schema: &VtypeSchema) -> String {
    crate::generate(spec, schema).expect("generation should succeed")
}

pub fn generate_with(spec: &ConversionSpec, schema: &VtypeSchema, config: Config) -> String {
    crate::generate_with_config(spec, schema, config).expect("generation should succeed")
}
