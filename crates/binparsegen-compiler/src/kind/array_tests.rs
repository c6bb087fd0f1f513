use super::*;
use crate::Config;
use crate::resolve::{FieldArena, FieldDefinition};

fn arena_with(kind: ParserKind) -> (FieldArena, crate::resolve::FieldId) {
    let mut arena = FieldArena::default();
    let id = arena.alloc(FieldDefinition { offset: 0, kind });
    (arena, id)
}

#[test]
fn helper_clamps_and_advances_by_element_size() {
    let (arena, target) = arena_with(ParserKind::Integer(Integer::unsigned(Width::W16)));
    let config = Config::new().profile("Win");
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let array = Array {
        target,
        count: ArrayCount::Static(3),
    };
    insta::assert_snapshot!(array.emit_helper(env), @r"
    #[allow(unused_variables)]
    fn parse_array_uint16<'a>(profile: &'a Win, reader: &'a dyn ReaderAt, mut offset: u64, count: i64) -> Vec<u16> {
        let count = count.clamp(0, 4000000) as usize;
        let mut result = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let value = parse_uint16(reader, offset);
            offset = offset.wrapping_add(2 as u64);
            result.push(value);
        }
        result
    }
    ");
}

#[test]
fn key_uses_clamped_count() {
    let (arena, target) = arena_with(ParserKind::Integer(Integer::unsigned(Width::W8)));
    let config = Config::default();
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let key = |count| {
        Array {
            target,
            count: ArrayCount::Static(count),
        }
        .key(env)
    };
    assert_eq!(key(5_000_000), "array_4000000_uint8");
    assert_eq!(key(-3), "array_0_uint8");
    assert_eq!(key(16), "array_16_uint8");
}

#[test]
fn dynamic_count_calls_sibling_accessor() {
    let (arena, target) = arena_with(ParserKind::StructureReference(StructureReference {
        name: "Entry".to_string(),
    }));
    let config = Config::default();
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let array = ParserKind::Array(Array {
        target,
        count: ArrayCount::Dynamic("type".to_string()),
    });
    assert_eq!(
        array.decode_expr(env, DecodeCtx::ACCESSOR),
        "parse_array_Entry(self.profile, self.reader, offset, self.r#type() as i64)"
    );
    assert_eq!(array.value_type(env), "Vec<Entry<'a>>");
    assert!(array.value_is_indirect(env));
    assert_eq!(array.debug_style(), DebugStyle::Count);
}

#[test]
fn size_walks_elements_from_their_own_offsets() {
    let (arena, target) = arena_with(ParserKind::String(Text { length: None }));
    let config = Config::default();
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let array = ParserKind::Array(Array {
        target,
        count: ArrayCount::Static(2),
    });
    assert_eq!(
        array.size_expression(env, "value", "offset"),
        "value.iter().fold(offset, |end, item| end.wrapping_add(terminated_string_size(reader, end) as u64)).wrapping_sub(offset)"
    );
}

#[test]
fn decode_uses_clamped_count() {
    let (arena, target) = arena_with(ParserKind::Integer(Integer::unsigned(Width::W8)));
    let config = Config::default();
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let decode = |count| {
        Array {
            target,
            count: ArrayCount::Static(count),
        }
        .decode_expr(env, DecodeCtx::HELPER)
    };
    assert_eq!(decode(-1), decode(0));
    assert_eq!(decode(5_000_000), "parse_array_uint8(profile, reader, offset, 4000000)");
}

#[test]
fn pointer_decodes_target_at_read_offset() {
    let (arena, target) = arena_with(ParserKind::StructureReference(StructureReference {
        name: "Node".to_string(),
    }));
    let config = Config::default();
    let env = Env {
        arena: &arena,
        config: &config,
    };
    let pointer = ParserKind::Pointer(Pointer { target });
    insta::assert_snapshot!(pointer.decode_expr(env, DecodeCtx::ACCESSOR), @r"
    {
        let offset = parse_uint64(self.reader, offset);
        self.profile.Node(self.reader, offset)
    }
    ");
    assert_eq!(pointer.value_type(env), "Node<'a>");
    assert_eq!(pointer.element_key(env), "ptr_Node");
    assert_eq!(pointer.size_expression(env, "value", "offset"), "8");
    let deps = pointer.dependencies(env);
    assert_eq!(*deps[0], ParserKind::Integer(Integer::UINT64));
    assert_eq!(*deps[1], arena.get(target).kind);
}
