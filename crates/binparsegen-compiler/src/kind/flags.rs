//! Bit sets mapped to symbolic names.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{DecodeCtx, Integer, Width, params_hash};

pub(super) const HELPER: &str = "Flags";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flags {
    pub width: Width,
    /// Name to bit position.
    pub bitmap: BTreeMap<String, u64>,
    /// Name to mask; set when any masked bit is set.
    pub maskmap: BTreeMap<String, u64>,
}

impl Flags {
    pub fn backing(&self) -> Integer {
        Integer::unsigned(self.width)
    }

    /// All predicates as (mask, name), sorted by mask then name.
    ///
    /// Bit positions are turned into single-bit masks. Positions past 63 can
    /// never be set and are dropped.
    pub fn predicates(&self) -> Vec<(u64, &str)> {
        let mut predicates = Vec::with_capacity(self.bitmap.len() + self.maskmap.len());
        for (name, &pos) in &self.bitmap {
            if pos >= 64 {
                tracing::warn!(
                    name = name.as_str(),
                    pos,
                    "dropping flag with bit position past 63"
                );
                continue;
            }
            predicates.push((1u64 << pos, name.as_str()));
        }
        for (name, &mask) in &self.maskmap {
            predicates.push((mask, name.as_str()));
        }
        predicates.sort();
        predicates
    }

    pub fn key(&self) -> String {
        let mut canonical = String::new();
        for (name, pos) in &self.bitmap {
            let _ = write!(canonical, "b:{name:?}={pos};");
        }
        for (name, mask) in &self.maskmap {
            let _ = write!(canonical, "m:{name:?}={mask};");
        }
        format!("flags_{}_{}", self.backing().key(), params_hash(&canonical))
    }

    pub fn decode_expr(&self, ctx: DecodeCtx<'_>) -> String {
        let predicates = self.predicates();
        let mut out = String::new();
        out.push_str("{\n");
        let _ = writeln!(
            out,
            "    let value = {}({}, offset) as u64;",
            self.backing().helper_name(),
            ctx.reader
        );
        if predicates.is_empty() {
            out.push_str("    Flags { value, names: std::collections::BTreeSet::new() }\n");
        } else {
            out.push_str("    let mut names = std::collections::BTreeSet::new();\n");
            for (mask, name) in predicates {
                let _ = writeln!(
                    out,
                    "    if value & {mask:#x} != 0 {{\n        names.insert({name:?});\n    }}"
                );
            }
            out.push_str("    Flags { value, names }\n");
        }
        out.push('}');
        out
    }
}

pub(super) fn emit_helper() -> String {
    r#"#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flags {
    pub value: u64,
    pub names: std::collections::BTreeSet<&'static str>,
}

impl Flags {
    pub fn is_set(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.names.iter().copied().collect();
        write!(f, "{} ({})", self.value, names.join(", "))
    }
}
"#
    .to_string()
}
