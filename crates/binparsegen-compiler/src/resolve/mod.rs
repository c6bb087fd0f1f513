//! Field-definition resolution.
//!
//! Turns raw schema entries `[offset, [kind, params?]]` into [`FieldDefinition`]s
//! in the run's [`FieldArena`], recursing through `target`/`target_args` for
//! composite kinds. Every kind resolved here is registered with the prototype
//! cache, dependencies first.

mod arena;
mod params;


use serde::de::DeserializeOwned;
use serde_json::Value;

use binparsegen_core::{ConversionSpec, is_valid_ident, normalize_name};

use crate::context::GenContext;
use crate::kind::{
    Array, ArrayCount, BitField, Enumeration, Flags, Integer, ParserKind, Pointer, Signature,
    StructureReference, Text, Width,
};

pub use arena::{FieldArena, FieldDefinition, FieldId};
use params::{
    BitFieldArgs, CountArg, EnumArgs, FlagsArgs, SignatureArgs, StringArgs, TargetArgs,
};

/// Problems with a single field entry.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("expected [offset, [kind, params]], found {0}")]
    Malformed(String),

    #[error("offset must be a non-negative integer, found {0}")]
    Offset(String),

    #[error("kind name must be a string, found {0}")]
    KindName(String),

    #[error("invalid {kind} parameters: {source}")]
    Params {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} requires a `target`")]
    MissingTarget(&'static str),

    #[error("bit range {start_bit}..{end_bit} does not fit in 64 bits")]
    BitRange { start_bit: u32, end_bit: u32 },

    #[error("`{0}` is not a usable structure name")]
    StructureName(String),
}

type Result<T> = std::result::Result<T, ResolveError>;

/// Recursive-descent resolver over one run's context.
pub struct Resolver<'a> {
    ctx: &'a mut GenContext,
    spec: &'a ConversionSpec,
}

impl<'a> Resolver<'a> {
    pub fn new(ctx: &'a mut GenContext, spec: &'a ConversionSpec) -> Self {
        Self { ctx, spec }
    }

    /// Resolve a top-level field entry `[offset, [kind, params?]]`.
    pub fn resolve_field(&mut self, entry: &Value) -> Result<FieldId> {
        let Some([offset, kind_entry, ..]) = entry.as_array().map(Vec::as_slice) else {
            return Err(ResolveError::Malformed(entry.to_string()));
        };
        let offset = offset
            .as_u64()
            .ok_or_else(|| ResolveError::Offset(offset.to_string()))?;

        let (name, params) = match kind_entry {
            Value::Array(items) => match items.as_slice() {
                [name, rest @ ..] => (name, rest.first()),
                [] => return Err(ResolveError::Malformed(entry.to_string())),
            },
            other => (other, None),
        };
        let name = name
            .as_str()
            .ok_or_else(|| ResolveError::KindName(name.to_string()))?;

        self.resolve(name, params, offset)
    }

    fn resolve(&mut self, name: &str, params: Option<&Value>, offset: u64) -> Result<FieldId> {
        let kind = self.resolve_kind(name, params)?;
        self.ctx.register(&kind);
        Ok(self.ctx.arena_mut().alloc(FieldDefinition { offset, kind }))
    }

    fn resolve_target(&mut self, kind: &'static str, args: TargetArgs) -> Result<FieldId> {
        let target = args.target.ok_or(ResolveError::MissingTarget(kind))?;
        self.resolve(&target, args.target_args.as_ref(), 0)
    }

    fn resolve_kind(&mut self, name: &str, params: Option<&Value>) -> Result<ParserKind> {
        let kind = match name {
            "unsigned long long" | "uint64" => ParserKind::Integer(Integer::unsigned(Width::W64)),
            "long long" | "int64" => ParserKind::Integer(Integer::signed(Width::W64)),
            "unsigned long" | "unsigned int" | "uint32" => {
                ParserKind::Integer(Integer::unsigned(Width::W32))
            }
            "long" | "int" | "int32" => ParserKind::Integer(Integer::signed(Width::W32)),
            "unsigned short" | "uint16" => ParserKind::Integer(Integer::unsigned(Width::W16)),
            "short" | "int16" => ParserKind::Integer(Integer::signed(Width::W16)),
            "unsigned char" | "uint8" => ParserKind::Integer(Integer::unsigned(Width::W8)),
            "char" | "int8" => ParserKind::Integer(Integer::signed(Width::W8)),

            "Pointer" => {
                let args: TargetArgs = decode("Pointer", params)?;
                let target = self.resolve_target("Pointer", args)?;
                ParserKind::Pointer(Pointer { target })
            }

            "Array" => {
                let mut args: TargetArgs = decode("Array", params)?;
                let count = match args.count.take() {
                    Some(CountArg::Static(n)) => ArrayCount::Static(n),
                    Some(CountArg::Dynamic(field)) => ArrayCount::Dynamic(field),
                    None => ArrayCount::Static(0),
                };
                let target = self.resolve_target("Array", args)?;
                ParserKind::Array(Array { target, count })
            }

            "Enumeration" => {
                let args: EnumArgs = decode("Enumeration", params)?;
                ParserKind::Enumeration(Enumeration {
                    width: Width::from_target(args.target.as_deref()),
                    choices: args.choices,
                })
            }

            "Flags" => {
                let args: FlagsArgs = decode("Flags", params)?;
                ParserKind::Flags(Flags {
                    width: Width::from_target(args.target.as_deref()),
                    bitmap: args.bitmap,
                    maskmap: args.maskmap,
                })
            }

            "BitField" => {
                let args: BitFieldArgs = decode("BitField", params)?;
                if args.start_bit >= 64 || args.end_bit > 64 {
                    return Err(ResolveError::BitRange {
                        start_bit: args.start_bit,
                        end_bit: args.end_bit,
                    });
                }
                ParserKind::BitField(BitField {
                    start_bit: args.start_bit,
                    end_bit: args.end_bit,
                    width: Width::from_target(args.target.as_deref()),
                })
            }

            "Signature" => {
                let args: SignatureArgs = decode("Signature", params)?;
                ParserKind::Signature(Signature {
                    expected: args.value.into_bytes(),
                })
            }

            "String" => {
                let args: StringArgs = decode("String", params)?;
                ParserKind::String(text(args))
            }

            "UnicodeString" => {
                let args: StringArgs = decode("UnicodeString", params)?;
                ParserKind::Utf16String(text(args))
            }

            other => {
                let canonical = normalize_name(other);
                if !is_valid_ident(&canonical) {
                    return Err(ResolveError::StructureName(other.to_string()));
                }
                if !self.spec.selects_struct(other) {
                    tracing::debug!(
                        structure = other,
                        "reference to a structure outside this run"
                    );
                }
                ParserKind::StructureReference(StructureReference { name: canonical })
            }
        };
        Ok(kind)
    }
}

fn text(args: StringArgs) -> Text {
    Text {
        length: (args.length > 0).then_some(args.length),
    }
}

/// Missing or `null` parameters decode as an empty object.
fn decode<T: DeserializeOwned>(kind: &'static str, params: Option<&Value>) -> Result<T> {
    let value = match params {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value) => value.clone(),
    };
    serde_json::from_value(value).map_err(|source| ResolveError::Params { kind, source })
}
