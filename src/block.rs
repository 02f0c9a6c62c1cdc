//! Storage units ("blocks") and the type-level unit count.
//!
//! A [`BlockInteger`][crate::BlockInteger] of `N` bits is stored in
//! `ceil(N / B::BITS)` blocks of type `B`. Since const generics on stable
//! cannot express `[B; (N + B::BITS - 1) / B::BITS]`, the width is a
//! [`typenum`] number and the unit count is computed at the type level,
//! see [`Width`].

use core::{
    fmt::Debug,
    ops::{Add, Div},
};

use generic_array::ArrayLength;
use typenum::{Quot, Sum, Unsigned, U15, U16, U31, U32, U7, U8};
use zeroize::Zeroize;

mod private {
    pub trait Sealed {}
}

/// A storage unit: `u8`, `u16` or `u32`.
///
/// Carries are detected by widening to `u64`, so blocks must be at most
/// 32 bits wide; `u64` is intentionally not a block.
pub trait Block: Copy + Default + Eq + Debug + Zeroize + private::Sealed + 'static {
    /// Bits per block, `W`.
    const BITS: usize;
    /// The largest value of a block, widened.
    const MAX: u64;

    /// `W` as a type.
    type Bits: Unsigned;
    /// `W - 1` as a type, so the unit count can round up without `Sub` bounds.
    type Pad: Unsigned;

    /// Keeps the low `W` bits.
    fn truncate(value: u64) -> Self;

    fn widen(self) -> u64;
}

macro_rules! impl_block {
    ($block:ty, $bits:ty, $pad:ty) => {
        impl private::Sealed for $block {}

        impl Block for $block {
            const BITS: usize = <$block>::BITS as usize;
            const MAX: u64 = <$block>::MAX as u64;

            type Bits = $bits;
            type Pad = $pad;

            #[inline]
            fn truncate(value: u64) -> Self {
                value as $block
            }

            #[inline]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_block!(u8, U8, U7);
impl_block!(u16, U16, U15);
impl_block!(u32, U32, U31);

/// A bit width `N` that can be stored in blocks `B`.
///
/// Implemented for every [`typenum`] unsigned; the associated `Units` is
/// `(N + W - 1) / W`, never supplied by hand.
pub trait Width<B: Block>: Unsigned {
    type Units: ArrayLength;
}

impl<N, B> Width<B> for N
where
    B: Block,
    N: Unsigned + Add<B::Pad>,
    Sum<N, B::Pad>: Div<B::Bits>,
    Quot<Sum<N, B::Pad>, B::Bits>: ArrayLength,
{
    type Units = Quot<Sum<N, B::Pad>, B::Bits>;
}

/// Number of units for `N` bits in blocks `B`.
pub type UnitsFor<N, B> = <N as Width<B>>::Units;

#[cfg(test)]
mod test {
    use super::*;
    use typenum::{U1, U12, U17, U64, U9};

    #[test]
    fn unit_counts() {
        assert_eq!(UnitsFor::<U1, u8>::USIZE, 1);
        assert_eq!(UnitsFor::<U8, u8>::USIZE, 1);
        assert_eq!(UnitsFor::<U9, u8>::USIZE, 2);
        assert_eq!(UnitsFor::<U12, u8>::USIZE, 2);
        assert_eq!(UnitsFor::<U17, u16>::USIZE, 2);
        assert_eq!(UnitsFor::<U64, u32>::USIZE, 2);
        assert_eq!(UnitsFor::<U64, u8>::USIZE, 8);
    }

    #[test]
    fn truncate_and_widen() {
        assert_eq!(u8::truncate(0x1ff), 0xff);
        assert_eq!(u16::truncate(0x1_2345), 0x2345);
        assert_eq!(u32::truncate(u64::MAX).widen(), u32::MAX as u64);
        assert_eq!(<u16 as Block>::MAX, 0xffff);
    }
}
