use indoc::indoc;

use crate::{ConversionSpec, VtypeSchema};

fn registry_spec() -> ConversionSpec {
    ConversionSpec::from_yaml(indoc! {r#"
        Module: regparser
        Profile: RegistryProfile
        Filename: registry.json
        GenerateDebugString: true
        Structs:
          - _HBASE_BLOCK
          - _CM_KEY_NODE
        FieldWhiteList:
          _CM_KEY_NODE:
            - Signature
            - LastWriteTime
            - Flags
        FieldBlackList:
          _CM_KEY_NODE:
            - Flags
          _HBASE_BLOCK:
            - Reserved1
    "#})
    .expect("spec parses")
}

#[test]
fn spec_uses_original_key_names() {
    let spec = registry_spec();

    assert_eq!(spec.module, "regparser");
    assert_eq!(spec.profile, "RegistryProfile");
    assert_eq!(spec.filename.to_str(), Some("registry.json"));
    assert!(spec.generate_debug_string);
    assert_eq!(spec.structs, vec!["_HBASE_BLOCK", "_CM_KEY_NODE"]);
}

#[test]
fn spec_missing_keys_default() {
    let spec = ConversionSpec::from_yaml("Profile: P\n").unwrap();

    assert_eq!(spec.profile, "P");
    assert!(spec.structs.is_empty());
    assert!(!spec.generate_debug_string);
}

#[test]
fn spec_rejects_malformed_yaml() {
    assert!(ConversionSpec::from_yaml("Structs: [a, b").is_err());
    assert!(ConversionSpec::from_yaml("Structs: 12").is_err());
}

#[test]
fn deny_list_beats_allow_list() {
    let spec = registry_spec();

    assert!(spec.selects_field("_CM_KEY_NODE", "Signature"));
    assert!(!spec.selects_field("_CM_KEY_NODE", "Flags"));
    assert!(!spec.selects_field("_CM_KEY_NODE", "Parent"));
}

#[test]
fn no_lists_selects_everything() {
    let spec = registry_spec();

    assert!(spec.selects_field("_HBIN", "Signature"));
    assert!(spec.selects_field("_HBASE_BLOCK", "Major"));
    assert!(!spec.selects_field("_HBASE_BLOCK", "Reserved1"));
}

#[test]
fn selects_struct_by_schema_name() {
    let spec = registry_spec();

    assert!(spec.selects_struct("_CM_KEY_NODE"));
    assert!(!spec.selects_struct("CM_KEY_NODE"));
}

#[test]
fn schema_keeps_raw_entries() {
    let schema = VtypeSchema::from_json(indoc! {r#"
        {
            "_HBIN": [32, {"Signature": [0, ["Signature", {"value": "hbin"}]]}],
            "_CELL": [4, {}]
        }
    "#})
    .unwrap();

    assert_eq!(schema.len(), 2);
    assert!(schema.contains("_HBIN"));
    assert_eq!(schema.sorted_names(), vec!["_CELL", "_HBIN"]);
    assert_eq!(schema.get("_CELL").unwrap()[0], 4);
}

#[test]
fn schema_rejects_non_object() {
    assert!(VtypeSchema::from_json("[1, 2]").is_err());
    assert!(VtypeSchema::from_json("{").is_err());
}
