//! Shared test helpers.

pub use crate::aliases::*;
use crate::{Block, BlockInteger, Width};
use rand_core::{impls, Error};
pub use rand_core::RngCore;

/// Deterministic xorshift64, good enough to sample operands.
pub struct XorShiftRng(pub u64);

impl Default for XorShiftRng {
    fn default() -> Self {
        Self(0x9E37_79B9_7F4A_7C15)
    }
}

impl XorShiftRng {
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Uniform in the signed range of `bits` bits.
    pub fn next_signed(&mut self, bits: u32) -> i64 {
        (self.next_i64() << (64 - bits)) >> (64 - bits)
    }
}

impl RngCore for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Bits above `N` in the most significant unit are zero.
pub fn assert_trimmed<N: Width<B>, B: Block>(x: &BlockInteger<N, B>) {
    let top = x.units()[BlockInteger::<N, B>::UNITS - 1].widen();
    assert_eq!(top & !BlockInteger::<N, B>::MSU_MASK, 0, "untrimmed: {:?}", x);
}
