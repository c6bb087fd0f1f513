use super::*;

#[test]
fn decode_picks_terminated_or_fixed() {
    let terminated = Text { length: None };
    let fixed = Text { length: Some(16) };
    assert_eq!(
        terminated.string_decode(DecodeCtx::HELPER),
        "parse_terminated_string(reader, offset)"
    );
    assert_eq!(
        fixed.utf16_decode(DecodeCtx::ACCESSOR),
        "parse_utf16_string(self.reader, offset, 16)"
    );
}

#[test]
fn keys_carry_length() {
    assert_eq!(Text { length: None }.key("string"), "string");
    assert_eq!(Text { length: Some(64) }.key("utf16"), "utf16_64");
}

#[test]
fn terminated_size_rescans_source() {
    let terminated = Text { length: None };
    assert_eq!(
        terminated.string_size("offset"),
        "terminated_string_size(reader, offset)"
    );
    assert_eq!(
        terminated.utf16_size("end"),
        "terminated_utf16_size(reader, end)"
    );
    assert_eq!(Text { length: Some(8) }.string_size("offset"), "8");
}

#[test]
fn helpers_use_configured_window() {
    let config = crate::Config::new().scan_window(64);
    assert!(string::emit_string_helper(&config).contains("vec![0u8; 64]"));
    assert!(string::emit_utf16_helper(&config).contains("vec![0u8; 64]"));
}

#[test]
fn both_lengths_share_one_helper() {
    let (arena, config) = (crate::resolve::FieldArena::default(), crate::Config::default());
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let a = ParserKind::Utf16String(Text { length: None });
    let b = ParserKind::Utf16String(Text { length: Some(4) });
    assert_eq!(a.helper_identity(env).as_deref(), Some("UTF16String"));
    assert_eq!(a.helper_identity(env), b.helper_identity(env));
    assert_eq!(a.element_key(env), "utf16");
    assert_eq!(b.element_key(env), "utf16_4");
}
