use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{Block, BlockInteger, Width};

impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    /// Note that "left" means "higher number". Truncating, bits past `N` are lost.
    fn shift_left(&mut self, bits: usize) {
        let bits = core::cmp::min(bits, Self::BITS);
        let n_units = core::cmp::min(bits / B::BITS, Self::UNITS);

        // shift back by n_units
        self.blocks.copy_within(..(Self::UNITS - n_units), n_units);
        self.blocks[..n_units].fill(B::default());

        // shift back sub-unit amount of bits
        let n_bits = bits % B::BITS;
        if n_bits > 0 {
            let mut carry = 0;
            for i in n_units..Self::UNITS {
                let unit = self.block(i);
                self.set_block(i, (unit << n_bits) | carry);
                carry = unit >> (B::BITS - n_bits);
            }
        }
        self.trim();
    }

    /// Note that "right" means "lower number". Logical, zeros are shifted in.
    fn shift_right(&mut self, bits: usize) {
        let bits = core::cmp::min(bits, Self::BITS);
        let n_units = core::cmp::min(bits / B::BITS, Self::UNITS);

        // shift by n_units
        self.blocks.copy_within(n_units.., 0);
        self.blocks[(Self::UNITS - n_units)..].fill(B::default());

        let n_bits = bits % B::BITS;
        if n_bits > 0 {
            let mut borrow = 0;
            for i in (0..(Self::UNITS - n_units)).rev() {
                let unit = self.block(i);
                self.set_block(i, (unit >> n_bits) | borrow);
                borrow = unit << (B::BITS - n_bits);
            }
        }
    }
}

impl<N: Width<B>, B: Block> ShlAssign<isize> for BlockInteger<N, B> {
    /// A negative amount shifts right instead; amounts beyond `N` clear.
    fn shl_assign(&mut self, bits: isize) {
        if bits < 0 {
            self.shift_right(bits.unsigned_abs());
        } else {
            self.shift_left(bits as usize);
        }
    }
}

impl<N: Width<B>, B: Block> ShrAssign<isize> for BlockInteger<N, B> {
    /// A negative amount shifts left instead; amounts beyond `N` clear.
    fn shr_assign(&mut self, bits: isize) {
        if bits < 0 {
            self.shift_left(bits.unsigned_abs());
        } else {
            self.shift_right(bits as usize);
        }
    }
}

impl<N: Width<B>, B: Block> Shl<isize> for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    #[inline]
    fn shl(self, bits: isize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl<N: Width<B>, B: Block> Shr<isize> for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    #[inline]
    fn shr(self, bits: isize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}
