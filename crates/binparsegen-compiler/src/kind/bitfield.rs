//! Bit ranges extracted from a backing unsigned integer.

use super::{DecodeCtx, Integer, Width};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitField {
    pub start_bit: u32,
    pub end_bit: u32,
    pub width: Width,
}

impl BitField {
    pub fn backing(&self) -> Integer {
        Integer::unsigned(self.width)
    }

    /// Mask over the low `end_bit` bits of the backing value.
    ///
    /// The mask spans `end_bit` bits, not `end_bit - start_bit`; the shift
    /// alone discards the bits below `start_bit`.
    pub fn mask(&self) -> u64 {
        if self.end_bit >= 64 {
            u64::MAX
        } else {
            (1u64 << self.end_bit) - 1
        }
    }

    pub fn key(&self) -> String {
        format!(
            "bitfield_{}_{}_{}",
            self.backing().key(),
            self.start_bit,
            self.end_bit
        )
    }

    pub fn decode_expr(&self, ctx: DecodeCtx<'_>) -> String {
        format!(
            "(({}({}, offset) as u64) & {:#x}) >> {}",
            self.backing().helper_name(),
            ctx.reader,
            self.mask(),
            self.start_bit
        )
    }
}
