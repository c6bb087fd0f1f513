//! Fixed magic byte sequences.

use super::{DecodeCtx, params_hash};

pub(super) const HELPER: &str = "Signature";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    pub expected: Vec<u8>,
}

impl Signature {
    pub fn key(&self) -> String {
        format!("signature_{}", params_hash(&byte_string_literal(&self.expected)))
    }

    pub fn decode_expr(&self, ctx: DecodeCtx<'_>) -> String {
        format!(
            "Signature {{ value: parse_signature({}, offset, {}), signature: {} }}",
            ctx.reader,
            self.expected.len(),
            byte_string_literal(&self.expected)
        )
    }
}

/// Render bytes as a Rust byte string literal.
pub(crate) fn byte_string_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b\"");
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push('"');
    out
}

pub(super) fn emit_helper() -> String {
    r#"#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub value: Vec<u8>,
    pub signature: &'static [u8],
}

impl Signature {
    pub fn is_valid(&self) -> bool {
        self.value == self.signature
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_valid() { "valid" } else { "invalid" };
        write!(f, "{} ({})", String::from_utf8_lossy(&self.value), state)
    }
}

fn parse_signature(reader: &dyn ReaderAt, offset: u64, length: usize) -> Vec<u8> {
    let mut buf = vec![0u8; length];
    match reader.read_at(offset, &mut buf) {
        Ok(n) => buf.truncate(n),
        Err(_) => buf.clear(),
    }
    buf
}
"#
    .to_string()
}
