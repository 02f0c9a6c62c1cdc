use core::ops::{Neg, Not, Sub, SubAssign};

use super::twos_complement;
use crate::{Block, BlockInteger, Width};

// Subtraction modulo 2^N -- no borrows, just add the two's complement.

impl<N: Width<B>, B: Block> SubAssign<&Self> for BlockInteger<N, B> {
    fn sub_assign(&mut self, subtrahend: &Self) {
        *self += &twos_complement(subtrahend);
    }
}

impl<N: Width<B>, B: Block> Sub for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}

impl<N: Width<B>, B: Block> Neg for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    fn neg(self) -> Self::Output {
        twos_complement(self)
    }
}

/// One's complement.
impl<N: Width<B>, B: Block> Not for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    fn not(self) -> Self::Output {
        let mut complement = self.clone();
        complement.flip();
        complement
    }
}
