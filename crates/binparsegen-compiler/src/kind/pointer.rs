//! 64-bit absolute offsets to a target kind.

use super::{DecodeCtx, Env, indent_tail};
use crate::resolve::FieldId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pointer {
    pub target: FieldId,
}

impl Pointer {
    /// The target is decoded at the pointer's value, shadowing `offset`.
    pub fn decode_expr(&self, env: Env<'_>, ctx: DecodeCtx<'_>) -> String {
        let target = env.target(self.target).decode_expr(env, ctx);
        format!(
            "{{\n    let offset = parse_uint64({}, offset);\n    {}\n}}",
            ctx.reader,
            indent_tail(&target, 4)
        )
    }
}
