//! Homogeneous runs of a target kind.

use binparsegen_core::escape_ident;

use super::{DecodeCtx, Env, indent_tail};
use crate::resolve::FieldId;

/// Number of elements, fixed by the schema or read from a sibling field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrayCount {
    Static(i64),
    /// Name of an integer field on the owning structure.
    Dynamic(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Array {
    pub target: FieldId,
    pub count: ArrayCount,
}

impl Array {
    pub fn helper_name(&self, env: Env<'_>) -> String {
        format!("parse_array_{}", env.target(self.target).element_key(env))
    }

    pub fn key(&self, env: Env<'_>) -> String {
        let count = match &self.count {
            ArrayCount::Static(n) => self.clamp(env, *n).to_string(),
            ArrayCount::Dynamic(_) => "dyn".to_string(),
        };
        format!("array_{count}_{}", env.target(self.target).element_key(env))
    }

    fn clamp(&self, env: Env<'_>, count: i64) -> u64 {
        (count.max(0) as u64).min(env.config.array_limit())
    }

    pub fn decode_expr(&self, env: Env<'_>, ctx: DecodeCtx<'_>) -> String {
        let count = match (&self.count, ctx.receiver) {
            (ArrayCount::Static(n), _) => self.clamp(env, *n).to_string(),
            (ArrayCount::Dynamic(field), Some(receiver)) => {
                format!("{receiver}.{}() as i64", escape_ident(field))
            }
            // Rejected while building definitions; unreachable for valid profiles.
            (ArrayCount::Dynamic(_), None) => "0".to_string(),
        };
        format!(
            "{}({}, {}, offset, {count})",
            self.helper_name(env),
            ctx.profile,
            ctx.reader
        )
    }

    /// Walks the elements from `offset`; each element is measured at its own start.
    pub fn size_expression(&self, env: Env<'_>, value: &str, offset: &str) -> String {
        let element = env.target(self.target).size_expression(env, "(*item)", "end");
        format!(
            "{value}.iter().fold({offset}, |end, item| end.wrapping_add({element} as u64)).wrapping_sub({offset})"
        )
    }

    pub fn emit_helper(&self, env: Env<'_>) -> String {
        let target = env.target(self.target);
        let decode = target.decode_expr(env, DecodeCtx::HELPER);
        format!(
            "#[allow(unused_variables)]\nfn {name}<'a>(profile: &'a {profile}, reader: &'a dyn ReaderAt, mut offset: u64, count: i64) -> Vec<{elem}> {{\n    let count = count.clamp(0, {max}) as usize;\n    let mut result = Vec::with_capacity(count.min(1024));\n    for _ in 0..count {{\n        let value = {decode};\n        offset = offset.wrapping_add({size} as u64);\n        result.push(value);\n    }}\n    result\n}}\n",
            name = self.helper_name(env),
            profile = env.config.profile_name(),
            elem = target.value_type(env),
            max = env.config.array_limit(),
            decode = indent_tail(&decode, 8),
            size = target.size_expression(env, "value", "offset"),
        )
    }
}
