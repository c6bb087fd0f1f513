use super::*;

#[test]
fn helper_reads_little_endian() {
    insta::assert_snapshot!(Integer::unsigned(Width::W32).emit_helper(), @r"
    fn parse_uint32(reader: &dyn ReaderAt, offset: u64) -> u32 {
        let mut buf = [0u8; 4];
        match reader.read_at(offset, &mut buf) {
            Ok(n) if n == buf.len() => u32::from_le_bytes(buf),
            _ => 0,
        }
    }
    ");
}

#[test]
fn keys_distinguish_sign_and_width() {
    assert_eq!(Integer::signed(Width::W8).key(), "int8");
    assert_eq!(Integer::unsigned(Width::W8).key(), "uint8");
    assert_eq!(Integer::signed(Width::W64).rust_type(), "i64");
    assert_eq!(Integer::UINT64.helper_name(), "parse_uint64");
}

#[test]
fn width_from_target_defaults_to_64() {
    assert_eq!(Width::from_target(Some("unsigned char")), Width::W8);
    assert_eq!(Width::from_target(Some("unsigned short")), Width::W16);
    assert_eq!(Width::from_target(Some("unsigned long")), Width::W32);
    assert_eq!(Width::from_target(Some("unsigned long long")), Width::W64);
    assert_eq!(Width::from_target(Some("unsigned int")), Width::W64);
    assert_eq!(Width::from_target(None), Width::W64);
}

#[test]
fn reinterpret_uses_twos_complement() {
    assert_eq!(Width::W8.reinterpret(-1), Some(0xff));
    assert_eq!(Width::W8.reinterpret(255), Some(0xff));
    assert_eq!(Width::W8.reinterpret(256), None);
    assert_eq!(Width::W8.reinterpret(-129), None);
    assert_eq!(Width::W16.reinterpret(-2), Some(0xfffe));
    assert_eq!(Width::W64.reinterpret(-1), Some(u64::MAX));
}

#[test]
fn accessor_reads_profile_offset() {
    let (arena, config) = (crate::resolve::FieldArena::default(), crate::Config::default());
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let kind = ParserKind::Integer(Integer::unsigned(Width::W16));
    let expected = concat!(
        "    pub fn r#type(&self) -> u16 {\n",
        "        let offset = self.profile.Off_Header_type.wrapping_add(self.offset);\n",
        "        parse_uint16(self.reader, offset)\n",
        "    }\n",
    );
    assert_eq!(kind.emit_accessor(env, "Header", "type"), expected);
}

#[test]
fn indent_tail_skips_first_line() {
    assert_eq!(indent_tail("a\nb\n\nc", 2), "a\n  b\n\n  c");
}
