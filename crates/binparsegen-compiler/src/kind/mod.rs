//! Parser kinds: the closed set of decoding strategies.
//!
//! Every kind answers the same questions for the assemblers:
//! - how to decode one value at a local `offset` (`decode_expr`)
//! - which shared helper it relies on (`helper_identity` / `emit_helper`)
//! - which other kinds' helpers it calls (`dependencies`)
//! - how the decoded value is typed and how many bytes it spans
//!
//! All answers are pure functions of the kind's parameters, the field arena and
//! the run config, which is what makes helper deduplication sound.

use std::borrow::Cow;

use binparsegen_core::escape_ident;

use crate::config::Config;
use crate::resolve::FieldArena;

mod array;
mod bitfield;
mod enumeration;
mod flags;
mod integer;
mod pointer;
mod signature;
mod string;
mod structure;

#[cfg(test)]
mod array_tests;
#[cfg(test)]
mod enumeration_tests;
#[cfg(test)]
mod flags_tests;
#[cfg(test)]
mod integer_tests;
#[cfg(test)]
mod string_tests;

pub use array::{Array, ArrayCount};
pub use bitfield::BitField;
pub use enumeration::Enumeration;
pub use flags::Flags;
pub use integer::Integer;
pub use pointer::Pointer;
pub use signature::Signature;
pub use string::Text;
pub use structure::StructureReference;

/// Width of a backing integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Width named by a vtype `target` string; anything unrecognized is 64 bits.
    pub fn from_target(target: Option<&str>) -> Self {
        match target {
            Some("unsigned long long") => Width::W64,
            Some("unsigned long") => Width::W32,
            Some("unsigned short") => Width::W16,
            Some("unsigned char") => Width::W8,
            _ => Width::W64,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    pub fn bytes(self) -> u64 {
        u64::from(self.bits() / 8)
    }

    /// Reinterpret a schema integer as this width's unsigned value.
    ///
    /// Negative keys use two's complement. Keys outside
    /// `[-(2^(bits-1)), 2^bits)` have no representation and yield `None`.
    pub fn reinterpret(self, key: i64) -> Option<u64> {
        let bits = self.bits();
        if bits == 64 {
            return Some(key as u64);
        }
        let min = -(1i64 << (bits - 1));
        let max = (1i64 << bits) - 1;
        (min..=max)
            .contains(&key)
            .then(|| (key as u64) & ((1u64 << bits) - 1))
    }
}

/// What kinds consult besides their own parameters.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a> {
    pub arena: &'a FieldArena,
    pub config: &'a Config,
}

impl<'a> Env<'a> {
    fn target(&self, id: crate::resolve::FieldId) -> &'a ParserKind {
        &self.arena.get(id).kind
    }
}

/// Names visible to a decode expression.
///
/// The byte offset to decode at is always the local `offset`.
#[derive(Clone, Copy, Debug)]
pub struct DecodeCtx<'a> {
    pub reader: &'a str,
    pub profile: &'a str,
    /// The owning structure instance, present only inside field accessors.
    pub receiver: Option<&'a str>,
}

impl DecodeCtx<'static> {
    /// Context of a field accessor method.
    pub const ACCESSOR: Self = Self {
        reader: "self.reader",
        profile: "self.profile",
        receiver: Some("self"),
    };

    /// Context of a shared helper function.
    pub const HELPER: Self = Self {
        reader: "reader",
        profile: "profile",
        receiver: None,
    };
}

/// How a debug formatter renders a field of this kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugStyle {
    /// Plain text (`{}`)
    Text,
    /// Hexadecimal (`{:#x}`)
    Hex,
    /// The value's own `Display`
    Display,
    /// Nested structure, rendered recursively and indented
    Nested,
    /// Element count only
    Count,
    /// Not rendered (pointers may form cycles)
    Skip,
}

/// One decoding strategy. Immutable once built from schema parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserKind {
    Integer(Integer),
    BitField(BitField),
    Enumeration(Enumeration),
    Flags(Flags),
    Signature(Signature),
    String(Text),
    Utf16String(Text),
    Array(Array),
    Pointer(Pointer),
    StructureReference(StructureReference),
}

impl ParserKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParserKind::Integer(_) => "Integer",
            ParserKind::BitField(_) => "BitField",
            ParserKind::Enumeration(_) => "Enumeration",
            ParserKind::Flags(_) => "Flags",
            ParserKind::Signature(_) => "Signature",
            ParserKind::String(_) => "String",
            ParserKind::Utf16String(_) => "UnicodeString",
            ParserKind::Array(_) => "Array",
            ParserKind::Pointer(_) => "Pointer",
            ParserKind::StructureReference(_) => "StructureReference",
        }
    }

    /// Deduplication key of the shared helper, if the kind has one.
    pub fn helper_identity(&self, env: Env<'_>) -> Option<String> {
        match self {
            ParserKind::Integer(int) => Some(int.helper_name()),
            ParserKind::Enumeration(_) => Some(enumeration::HELPER.to_string()),
            ParserKind::Flags(_) => Some(flags::HELPER.to_string()),
            ParserKind::Signature(_) => Some(signature::HELPER.to_string()),
            ParserKind::String(_) => Some(string::STRING_HELPER.to_string()),
            ParserKind::Utf16String(_) => Some(string::UTF16_HELPER.to_string()),
            ParserKind::Array(array) => Some(array.helper_name(env)),
            ParserKind::BitField(_) | ParserKind::Pointer(_) | ParserKind::StructureReference(_) => {
                None
            }
        }
    }

    /// Source text of the shared helper; empty for kinds without one.
    pub fn emit_helper(&self, env: Env<'_>) -> String {
        match self {
            ParserKind::Integer(int) => int.emit_helper(),
            ParserKind::Enumeration(_) => enumeration::emit_helper(),
            ParserKind::Flags(_) => flags::emit_helper(),
            ParserKind::Signature(_) => signature::emit_helper(),
            ParserKind::String(_) => string::emit_string_helper(env.config),
            ParserKind::Utf16String(_) => string::emit_utf16_helper(env.config),
            ParserKind::Array(array) => array.emit_helper(env),
            ParserKind::BitField(_) | ParserKind::Pointer(_) | ParserKind::StructureReference(_) => {
                String::new()
            }
        }
    }

    /// Kinds whose helpers this kind's code calls.
    pub fn dependencies<'k>(&'k self, env: Env<'k>) -> Vec<Cow<'k, ParserKind>> {
        match self {
            ParserKind::BitField(bits) => vec![Cow::Owned(ParserKind::Integer(bits.backing()))],
            ParserKind::Enumeration(e) => vec![Cow::Owned(ParserKind::Integer(e.backing()))],
            ParserKind::Flags(f) => vec![Cow::Owned(ParserKind::Integer(f.backing()))],
            ParserKind::Array(array) => vec![Cow::Borrowed(env.target(array.target))],
            ParserKind::Pointer(pointer) => vec![
                Cow::Owned(ParserKind::Integer(Integer::UINT64)),
                Cow::Borrowed(env.target(pointer.target)),
            ],
            ParserKind::Integer(_)
            | ParserKind::Signature(_)
            | ParserKind::String(_)
            | ParserKind::Utf16String(_)
            | ParserKind::StructureReference(_) => Vec::new(),
        }
    }

    /// Rust type of a decoded value. May mention the lifetime `'a`.
    pub fn value_type(&self, env: Env<'_>) -> String {
        match self {
            ParserKind::Integer(int) => int.rust_type().to_string(),
            ParserKind::BitField(_) => "u64".to_string(),
            ParserKind::Enumeration(_) => "Enumeration".to_string(),
            ParserKind::Flags(_) => "Flags".to_string(),
            ParserKind::Signature(_) => "Signature".to_string(),
            ParserKind::String(_) | ParserKind::Utf16String(_) => "String".to_string(),
            ParserKind::Array(array) => format!("Vec<{}>", env.target(array.target).value_type(env)),
            ParserKind::Pointer(pointer) => env.target(pointer.target).value_type(env),
            ParserKind::StructureReference(reference) => reference.value_type(),
        }
    }

    /// Whether the decoded value borrows the reader and profile.
    pub fn value_is_indirect(&self, env: Env<'_>) -> bool {
        match self {
            ParserKind::StructureReference(_) => true,
            ParserKind::Array(array) => env.target(array.target).value_is_indirect(env),
            ParserKind::Pointer(pointer) => env.target(pointer.target).value_is_indirect(env),
            _ => false,
        }
    }

    /// Expression for the encoded byte width of `value`, a place of the value type
    /// decoded at `offset`. `reader` must be in scope.
    ///
    /// Terminated strings are measured in the source, not from the decoded text.
    /// The result is atomic (a literal or a call) so callers may append `as u64`.
    pub fn size_expression(&self, env: Env<'_>, value: &str, offset: &str) -> String {
        match self {
            ParserKind::Integer(int) => int.width.bytes().to_string(),
            ParserKind::BitField(bits) => bits.width.bytes().to_string(),
            ParserKind::Enumeration(e) => e.width.bytes().to_string(),
            ParserKind::Flags(f) => f.width.bytes().to_string(),
            ParserKind::Signature(sig) => sig.expected.len().to_string(),
            ParserKind::String(text) => text.string_size(offset),
            ParserKind::Utf16String(text) => text.utf16_size(offset),
            ParserKind::Array(array) => array.size_expression(env, value, offset),
            ParserKind::Pointer(_) => "8".to_string(),
            ParserKind::StructureReference(_) => format!("Structure::size(&{value})"),
        }
    }

    /// Expression decoding one value at the local `offset`.
    pub fn decode_expr(&self, env: Env<'_>, ctx: DecodeCtx<'_>) -> String {
        match self {
            ParserKind::Integer(int) => format!("{}({}, offset)", int.helper_name(), ctx.reader),
            ParserKind::BitField(bits) => bits.decode_expr(ctx),
            ParserKind::Enumeration(e) => e.decode_expr(ctx),
            ParserKind::Flags(f) => f.decode_expr(ctx),
            ParserKind::Signature(sig) => sig.decode_expr(ctx),
            ParserKind::String(text) => text.string_decode(ctx),
            ParserKind::Utf16String(text) => text.utf16_decode(ctx),
            ParserKind::Array(array) => array.decode_expr(env, ctx),
            ParserKind::Pointer(pointer) => pointer.decode_expr(env, ctx),
            ParserKind::StructureReference(reference) => reference.decode_expr(ctx),
        }
    }

    /// Identifier fragment unique per (kind, width, sub-parameters).
    ///
    /// Array helpers are named after their element's key.
    pub fn element_key(&self, env: Env<'_>) -> String {
        match self {
            ParserKind::Integer(int) => int.key().to_string(),
            ParserKind::BitField(bits) => bits.key(),
            ParserKind::Enumeration(e) => e.key(),
            ParserKind::Flags(f) => f.key(),
            ParserKind::Signature(sig) => sig.key(),
            ParserKind::String(text) => text.key("string"),
            ParserKind::Utf16String(text) => text.key("utf16"),
            ParserKind::Array(array) => array.key(env),
            ParserKind::Pointer(pointer) => format!("ptr_{}", env.target(pointer.target).element_key(env)),
            ParserKind::StructureReference(reference) => reference.name.clone(),
        }
    }

    pub fn debug_style(&self) -> DebugStyle {
        match self {
            ParserKind::String(_) | ParserKind::Utf16String(_) => DebugStyle::Text,
            ParserKind::Integer(_) | ParserKind::BitField(_) => DebugStyle::Hex,
            ParserKind::Enumeration(_) | ParserKind::Flags(_) | ParserKind::Signature(_) => {
                DebugStyle::Display
            }
            ParserKind::StructureReference(_) => DebugStyle::Nested,
            ParserKind::Array(_) => DebugStyle::Count,
            ParserKind::Pointer(_) => DebugStyle::Skip,
        }
    }

    /// Accessor method named `field` on structure `owner`.
    ///
    /// The field's address is looked up in the profile offset table on every
    /// call, so overriding a profile offset takes effect immediately.
    pub fn emit_accessor(&self, env: Env<'_>, owner: &str, field: &str) -> String {
        let body = self.decode_expr(env, DecodeCtx::ACCESSOR);
        format!(
            "    pub fn {name}(&self) -> {ty} {{\n        let offset = self.profile.Off_{owner}_{field}.wrapping_add(self.offset);\n        {body}\n    }}\n",
            name = escape_ident(field),
            ty = self.value_type(env),
            body = indent_tail(&body, 8),
        )
    }
}

/// Indent every line but the first by `spaces`.
///
/// Used to splice multi-line expressions after existing indentation.
pub(crate) fn indent_tail(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }
    out
}

/// Stable short hash of canonicalized sub-parameters.
pub(crate) fn params_hash(canonical: &str) -> String {
    format!("{:08x}", crc32fast::hash(canonical.as_bytes()))
}
