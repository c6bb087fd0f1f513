use std::collections::BTreeMap;

use super::*;

fn enumeration(width: Width, choices: &[(i64, &str)]) -> Enumeration {
    Enumeration {
        width,
        choices: choices
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn decode_matches_sorted_choices_with_unknown_default() {
    let e = enumeration(Width::W8, &[(2, "Two"), (1, "One")]);
    insta::assert_snapshot!(e.decode_expr(DecodeCtx::ACCESSOR), @r#"
    {
        let value = parse_uint8(self.reader, offset);
        let name = match value {
            0x1 => "One",
            0x2 => "Two",
            _ => "Unknown",
        };
        Enumeration { value: value as u64, name }
    }
    "#);
}

#[test]
fn negative_keys_wrap_into_width() {
    let e = enumeration(Width::W16, &[(-1, "All"), (70000, "TooBig")]);
    let arms = e.arms();
    assert_eq!(arms.len(), 1);
    assert_eq!(arms.get(&0xffff), Some(&"All"));
}

#[test]
fn key_depends_on_choices() {
    let a = enumeration(Width::W32, &[(1, "A")]);
    let b = enumeration(Width::W32, &[(1, "B")]);
    assert!(a.key().starts_with("enum_uint32_"));
    assert_ne!(a.key(), b.key());
    assert_eq!(a.key(), a.clone().key());
}

#[test]
fn key_is_unambiguous_for_separator_labels() {
    let packed = enumeration(Width::W8, &[(1, "a;2=b")]);
    let split = enumeration(Width::W8, &[(1, "a"), (2, "b")]);
    assert_ne!(packed.key(), split.key());

    let quoted = enumeration(Width::W8, &[(1, "a\";2=\"b")]);
    assert_ne!(quoted.key(), split.key());
}

#[test]
fn helper_identity_is_shared() {
    let (arena, config) = (crate::resolve::FieldArena::default(), crate::Config::default());
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let a = ParserKind::Enumeration(enumeration(Width::W8, &[(0, "Zero")]));
    let b = ParserKind::Enumeration(enumeration(Width::W64, &[(9, "Nine")]));
    assert_eq!(a.helper_identity(env).as_deref(), Some("Enumeration"));
    assert_eq!(a.helper_identity(env), b.helper_identity(env));
    assert_eq!(a.emit_helper(env), b.emit_helper(env));
    assert_eq!(a.debug_style(), DebugStyle::Display);
}
