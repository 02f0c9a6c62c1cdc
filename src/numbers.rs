//! The block store: a fixed-width two's complement integer in little-endian units.

use core::marker::PhantomData;

use generic_array::GenericArray;
use rand_core::RngCore;
use typenum::Unsigned;

use crate::{Block, Error, Result, Width};

mod format;
mod trait_implementations;

pub use format::{BinaryDisplay, HexDisplay};

/// Signed integer of exactly `N` bits, stored in units of `B` (`u8` by default).
///
/// Internal representation is little-endian: unit 0 holds the least significant bits.
/// Bit `N - 1` is the sign bit, negation is the one's complement plus one.
///
/// Implementation ***must ensure*** that the bits of the most significant unit above
/// position `N - 1` are zero after every mutation. Equality is a plain unit-wise
/// comparison and [`Self::sign`] a single mask test because of this.
///
/// `N` is a [`typenum`] number, e.g. `BlockInteger<U12, u8>` has two byte units,
/// the top one using only four bits. `N` must be at least one.
pub struct BlockInteger<N, B = u8>
where
    N: Width<B>,
    B: Block,
{
    pub(crate) blocks: GenericArray<B, N::Units>,
    width: PhantomData<N>,
}

impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    /// Number of bits, `N`.
    pub const BITS: usize = N::USIZE;
    /// Number of storage units, `ceil(N / W)`.
    pub const UNITS: usize = <N::Units as Unsigned>::USIZE;

    /// MSU == Most Significant Unit
    pub(crate) const MSU: usize = Self::UNITS - 1;
    /// The valid bits of the MSU.
    pub(crate) const MSU_MASK: u64 = B::MAX >> (Self::UNITS * B::BITS - Self::BITS);
    pub(crate) const SIGN_BIT_MASK: u64 = 1 << ((Self::BITS - 1) % B::BITS);

    /// Number of nibbles, the top one possibly partial.
    pub const NIBBLES: usize = (Self::BITS + 3) / 4;

    pub fn zero() -> Self {
        Self {
            blocks: GenericArray::default(),
            width: PhantomData,
        }
    }

    pub fn one() -> Self {
        let mut one = Self::zero();
        one.set_block(0, 1);
        one
    }

    /// Loads the low `N` bits of `value`, zero above bit 63.
    pub fn from_raw_bits(value: u64) -> Self {
        let mut x = Self::zero();
        x.set_raw_bits(value);
        x
    }

    /// Uniformly random bits, trimmed to the width.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let mut x = Self::zero();
        for i in 0..Self::UNITS {
            x.set_block(i, rng.next_u32() as u64);
        }
        x.trim();
        x
    }

    /// Copy into another width: the lowest `min` units are copied, the rest is
    /// zero, then the top unit is trimmed.
    ///
    /// This is a zero-padding copy, not a sign extension.
    pub fn resize<M: Width<B>>(&self) -> BlockInteger<M, B> {
        let mut resized = BlockInteger::<M, B>::zero();
        let units = core::cmp::min(Self::UNITS, BlockInteger::<M, B>::UNITS);
        resized.blocks[..units].copy_from_slice(&self.blocks[..units]);
        resized.trim();
        resized
    }

    // raw unit access, no bounds checks beyond the slice's own

    #[inline]
    pub(crate) fn block(&self, i: usize) -> u64 {
        self.blocks[i].widen()
    }

    #[inline]
    pub(crate) fn set_block(&mut self, i: usize, value: u64) {
        self.blocks[i] = B::truncate(value);
    }

    /// Nulls the bits of the MSU outside of `N`.
    #[inline]
    pub(crate) fn trim(&mut self) {
        let top = self.block(Self::MSU) & Self::MSU_MASK;
        self.set_block(Self::MSU, top);
    }

    #[inline]
    pub(crate) fn bit(&self, i: usize) -> bool {
        (self.block(i / B::BITS) >> (i % B::BITS)) & 1 != 0
    }

    #[inline]
    pub(crate) fn put_bit(&mut self, i: usize, value: bool) {
        let mask = 1 << (i % B::BITS);
        let block = self.block(i / B::BITS);
        let block = if value { block | mask } else { block & !mask };
        self.set_block(i / B::BITS, block);
    }

    fn check(index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, bound })
        }
    }
}

/// ## Modifiers
impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    pub fn set_zero(&mut self) {
        self.blocks.iter_mut().for_each(|block| *block = B::default());
    }

    /// Sets bit `i` to `value`.
    pub fn set(&mut self, i: usize, value: bool) -> Result<()> {
        Self::check(i, Self::BITS)?;
        self.put_bit(i, value);
        Ok(())
    }

    /// Clears bit `i`.
    pub fn reset(&mut self, i: usize) -> Result<()> {
        self.set(i, false)
    }

    /// Loads the low `N` bits of `value`.
    pub fn set_raw_bits(&mut self, mut value: u64) {
        for i in 0..Self::UNITS {
            self.set_block(i, value);
            value >>= B::BITS;
        }
        self.trim();
    }

    /// In-place one's complement.
    pub fn flip(&mut self) -> &mut Self {
        for i in 0..Self::UNITS {
            let flipped = !self.block(i);
            self.set_block(i, flipped);
        }
        self.trim();
        self
    }
}

/// ## Selectors
impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    /// The sign bit.
    #[inline]
    pub fn sign(&self) -> bool {
        self.block(Self::MSU) & Self::SIGN_BIT_MASK != 0
    }

    /// Sign bit clear, zero included.
    pub fn is_positive(&self) -> bool {
        !self.sign()
    }

    pub fn is_negative(&self) -> bool {
        self.sign()
    }

    pub fn is_zero(&self) -> bool {
        self.blocks.iter().all(|&block| block == B::default())
    }

    pub fn is_odd(&self) -> bool {
        self.block(0) & 1 != 0
    }

    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Bit `i`.
    pub fn at(&self, i: usize) -> Result<bool> {
        Self::check(i, Self::BITS)?;
        Ok(self.bit(i))
    }

    /// Nibble `n`, counted from the least significant.
    pub fn nibble(&self, n: usize) -> Result<u8> {
        Self::check(n, Self::NIBBLES)?;
        Ok(self.nibble_unchecked(n))
    }

    /// Nibbles never straddle units, as every block width is a multiple of four.
    pub(crate) fn nibble_unchecked(&self, n: usize) -> u8 {
        let bit = 4 * n;
        ((self.block(bit / B::BITS) >> (bit % B::BITS)) & 0xF) as u8
    }

    /// Raw storage unit `b`.
    pub fn unit(&self, b: usize) -> Result<B> {
        Self::check(b, Self::UNITS)?;
        Ok(self.blocks[b])
    }

    /// The storage units, least significant first.
    pub fn units(&self) -> &[B] {
        &self.blocks
    }

    /// Position of the most significant set bit, `None` if zero.
    pub fn msb(&self) -> Option<usize> {
        (0..Self::UNITS).rev().find_map(|i| {
            let block = self.block(i);
            (block != 0).then(|| {
                let mut j = B::BITS - 1;
                while block & (1 << j) == 0 {
                    j -= 1;
                }
                i * B::BITS + j
            })
        })
    }

    /// Sign-extended conversion, keeping the low 64 bits if `N > 64`.
    pub fn to_i64(&self) -> i64 {
        let upper = core::cmp::min(Self::BITS, 64);
        let mut value: u64 = 0;
        for i in 0..upper {
            if self.bit(i) {
                value |= 1 << i;
            }
        }
        if self.sign() && upper < 64 {
            value |= u64::MAX << upper;
        }
        value as i64
    }
}
