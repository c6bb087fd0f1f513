//! Embedded structures, materialized through the profile.

use super::DecodeCtx;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructureReference {
    /// Canonical (normalized) structure name.
    pub name: String,
}

impl StructureReference {
    pub fn value_type(&self) -> String {
        format!("{}<'a>", self.name)
    }

    pub fn decode_expr(&self, ctx: DecodeCtx<'_>) -> String {
        format!("{}.{}({}, offset)", ctx.profile, self.name, ctx.reader)
    }
}
