use serde_json::json;

use crate::Config;
use crate::test_utils::{generate, generate_with, schema, spec_selecting};

#[test]
fn single_integer_field() {
    let schema = schema(json!({"_HEADER": [4, {"Size": [0, ["unsigned short"]]}]}));
    let out = generate(&spec_selecting(&["_HEADER"]), &schema);
    insta::assert_snapshot!(out, @r"
    // Code generated by binparsegen. DO NOT EDIT.
    // Module: test
    // Profile: Test

    use binparsegen_reader::{ReaderAt, Structure};

    fn parse_uint16(reader: &dyn ReaderAt, offset: u64) -> u16 {
        let mut buf = [0u8; 2];
        match reader.read_at(offset, &mut buf) {
            Ok(n) if n == buf.len() => u16::from_le_bytes(buf),
            _ => 0,
        }
    }

    #[allow(non_camel_case_types)]
    #[derive(Clone, Copy)]
    pub struct HEADER<'a> {
        pub reader: &'a dyn ReaderAt,
        pub offset: u64,
        pub profile: &'a Test,
    }

    impl Structure for HEADER<'_> {
        fn size(&self) -> u64 {
            4
        }
    }

    #[allow(non_snake_case)]
    impl<'a> HEADER<'a> {
        pub fn Size(&self) -> u16 {
            let offset = self.profile.Off_HEADER_Size.wrapping_add(self.offset);
            parse_uint16(self.reader, offset)
        }
    }

    #[allow(non_snake_case)]
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Test {
        pub Off_HEADER_Size: u64,
    }

    #[allow(non_snake_case)]
    impl Test {
        pub fn new() -> Self {
            Self {
                Off_HEADER_Size: 0,
            }
        }

        pub fn HEADER<'a>(&'a self, reader: &'a dyn ReaderAt, offset: u64) -> HEADER<'a> {
            HEADER {
                reader,
                offset,
                profile: self,
            }
        }
    }

    impl Default for Test {
        fn default() -> Self {
            Self::new()
        }
    }
    ");
}

#[test]
fn helpers_precede_structures_in_identity_order() {
    let schema = schema(json!({
        "S": [16, {
            "name": [0, ["String"]],
            "kind": [8, ["Enumeration", {"choices": {"0": "A"}, "target": "unsigned char"}]],
            "count": [12, ["unsigned long"]],
        }],
    }));
    let out = generate(&spec_selecting(&["S"]), &schema);
    let positions: Vec<usize> = [
        "pub struct Enumeration",
        "fn parse_terminated_string",
        "fn parse_uint32",
        "fn parse_uint8",
        "pub struct S<'a>",
        "pub struct Test",
    ]
    .iter()
    .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn runtime_crate_is_configurable() {
    let schema = schema(json!({}));
    let spec = spec_selecting(&[]);
    let out = generate_with(&spec, &schema, Config::from_spec(&spec).runtime_crate("crate::rt"));
    assert!(out.contains("use crate::rt::{ReaderAt, Structure};"));
    assert!(out.ends_with("}\n"));
    assert!(!out.ends_with("\n\n"));
}
