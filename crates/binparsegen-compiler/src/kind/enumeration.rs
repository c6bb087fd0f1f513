//! Integers mapped to symbolic names.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{DecodeCtx, Integer, Width, params_hash};

pub(super) const HELPER: &str = "Enumeration";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub width: Width,
    /// Schema keys as written. Negative keys are reinterpreted in `width`.
    pub choices: BTreeMap<i64, String>,
}

impl Enumeration {
    pub fn backing(&self) -> Integer {
        Integer::unsigned(self.width)
    }

    /// Choices keyed by their raw value in the backing width, sorted by key.
    pub fn arms(&self) -> BTreeMap<u64, &str> {
        let mut arms = BTreeMap::new();
        for (&key, name) in &self.choices {
            match self.width.reinterpret(key) {
                Some(value) => {
                    arms.entry(value).or_insert(name.as_str());
                }
                None => tracing::warn!(
                    key,
                    name = name.as_str(),
                    bits = self.width.bits(),
                    "dropping enumeration choice outside the backing width"
                ),
            }
        }
        arms
    }

    pub fn key(&self) -> String {
        let mut canonical = String::new();
        for (key, name) in &self.choices {
            let _ = write!(canonical, "{key}={name:?};");
        }
        format!("enum_{}_{}", self.backing().key(), params_hash(&canonical))
    }

    pub fn decode_expr(&self, ctx: DecodeCtx<'_>) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        let _ = writeln!(
            out,
            "    let value = {}({}, offset);",
            self.backing().helper_name(),
            ctx.reader
        );
        out.push_str("    let name = match value {\n");
        for (value, name) in self.arms() {
            let _ = writeln!(out, "        {value:#x} => {name:?},");
        }
        out.push_str("        _ => \"Unknown\",\n");
        out.push_str("    };\n");
        out.push_str("    Enumeration { value: value as u64, name }\n");
        out.push('}');
        out
    }
}

pub(super) fn emit_helper() -> String {
    r#"#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enumeration {
    pub value: u64,
    pub name: &'static str,
}

impl std::fmt::Display for Enumeration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
"#
    .to_string()
}
