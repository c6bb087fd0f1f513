//! Fixed-width little-endian integers.

use super::Width;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Integer {
    pub width: Width,
    pub signed: bool,
}

impl Integer {
    pub const UINT64: Integer = Integer::unsigned(Width::W64);

    pub const fn unsigned(width: Width) -> Self {
        Self {
            width,
            signed: false,
        }
    }

    pub const fn signed(width: Width) -> Self {
        Self {
            width,
            signed: true,
        }
    }

    pub fn key(&self) -> &'static str {
        match (self.signed, self.width) {
            (false, Width::W8) => "uint8",
            (false, Width::W16) => "uint16",
            (false, Width::W32) => "uint32",
            (false, Width::W64) => "uint64",
            (true, Width::W8) => "int8",
            (true, Width::W16) => "int16",
            (true, Width::W32) => "int32",
            (true, Width::W64) => "int64",
        }
    }

    pub fn rust_type(&self) -> &'static str {
        match (self.signed, self.width) {
            (false, Width::W8) => "u8",
            (false, Width::W16) => "u16",
            (false, Width::W32) => "u32",
            (false, Width::W64) => "u64",
            (true, Width::W8) => "i8",
            (true, Width::W16) => "i16",
            (true, Width::W32) => "i32",
            (true, Width::W64) => "i64",
        }
    }

    pub fn helper_name(&self) -> String {
        format!("parse_{}", self.key())
    }

    pub fn emit_helper(&self) -> String {
        format!(
            "fn {name}(reader: &dyn ReaderAt, offset: u64) -> {ty} {{\n    let mut buf = [0u8; {bytes}];\n    match reader.read_at(offset, &mut buf) {{\n        Ok(n) if n == buf.len() => {ty}::from_le_bytes(buf),\n        _ => 0,\n    }}\n}}\n",
            name = self.helper_name(),
            ty = self.rust_type(),
            bytes = self.width.bytes(),
        )
    }
}
