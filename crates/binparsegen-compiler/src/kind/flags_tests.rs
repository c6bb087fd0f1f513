use std::collections::BTreeMap;

use super::*;

fn flags(bits: &[(&str, u64)], masks: &[(&str, u64)]) -> Flags {
    let map = |pairs: &[(&str, u64)]| {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>()
    };
    Flags {
        width: Width::W32,
        bitmap: map(bits),
        maskmap: map(masks),
    }
}

#[test]
fn positions_become_single_bit_masks() {
    let f = flags(&[("WRITE", 1), ("READ", 0), ("HUGE", 64)], &[("ANY", 0x3)]);
    assert_eq!(f.predicates(), vec![(0x1, "READ"), (0x2, "WRITE"), (0x3, "ANY")]);
}

#[test]
fn decode_collects_names() {
    let f = flags(&[("READ", 0)], &[("LOW", 0xf0)]);
    insta::assert_snapshot!(f.decode_expr(DecodeCtx::ACCESSOR), @r#"
    {
        let value = parse_uint32(self.reader, offset) as u64;
        let mut names = std::collections::BTreeSet::new();
        if value & 0x1 != 0 {
            names.insert("READ");
        }
        if value & 0xf0 != 0 {
            names.insert("LOW");
        }
        Flags { value, names }
    }
    "#);
}

#[test]
fn empty_flags_skip_mutable_set() {
    let expr = flags(&[], &[]).decode_expr(DecodeCtx::HELPER);
    assert!(!expr.contains("let mut names"));
    assert!(expr.contains("parse_uint32(reader, offset)"));
}

#[test]
fn key_is_unambiguous_for_separator_names() {
    let packed = flags(&[("A=0;b:B", 1)], &[]);
    let split = flags(&[("A", 0), ("B", 1)], &[]);
    assert_ne!(packed.key(), split.key());
}

#[test]
fn key_separates_bits_from_masks() {
    let a = flags(&[("A", 1)], &[]);
    let b = flags(&[], &[("A", 1)]);
    assert_ne!(a.key(), b.key());
    assert!(a.key().starts_with("flags_uint32_"));
}
