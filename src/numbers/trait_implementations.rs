use core::{cmp::Ordering, marker::PhantomData};

use zeroize::Zeroize;

use super::BlockInteger;
use crate::{Block, Width};

impl<N: Width<B>, B: Block> Clone for BlockInteger<N, B> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            width: PhantomData,
        }
    }
}

impl<N: Width<B>, B: Block> Default for BlockInteger<N, B> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Unit-by-unit, which is exact as the bits above `N` are always zero.
impl<N: Width<B>, B: Block> PartialEq for BlockInteger<N, B> {
    fn eq(&self, other: &Self) -> bool {
        self.blocks.iter().zip(other.blocks.iter()).all(|(l, r)| l == r)
    }
}

impl<N: Width<B>, B: Block> Eq for BlockInteger<N, B> {}

// The order is read off the wrapping difference, so it is only meaningful while
// `lhs - rhs` fits in N bits, hence no `Ord`.
impl<N: Width<B>, B: Block> PartialOrd for BlockInteger<N, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let difference = self - other;
        Some(if difference.is_zero() {
            Ordering::Equal
        } else if difference.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}

impl<N: Width<B>, B: Block> Zeroize for BlockInteger<N, B> {
    fn zeroize(&mut self) {
        self.blocks.iter_mut().for_each(Zeroize::zeroize);
    }
}

// Signed natives fill every unit above their own width with their sign,
// i.e. an arithmetic shift through the units.
macro_rules! from_signed {
    ($($native:ty),*) => {$(
        impl<N: Width<B>, B: Block> From<$native> for BlockInteger<N, B> {
            fn from(native: $native) -> Self {
                let mut value = native as i64;
                let mut x = Self::zero();
                for i in 0..Self::UNITS {
                    x.set_block(i, value as u64);
                    value >>= B::BITS;
                }
                x.trim();
                x
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($native:ty),*) => {$(
        impl<N: Width<B>, B: Block> From<$native> for BlockInteger<N, B> {
            fn from(native: $native) -> Self {
                Self::from_raw_bits(native as u64)
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl<N: Width<B>, B: Block> From<BlockInteger<N, B>> for i64 {
    fn from(x: BlockInteger<N, B>) -> Self {
        x.to_i64()
    }
}

impl<N: Width<B>, B: Block> From<&BlockInteger<N, B>> for i64 {
    fn from(x: &BlockInteger<N, B>) -> Self {
        x.to_i64()
    }
}

#[cfg(feature = "ct-maybe")]
impl<N: Width<B>, B: Block> subtle::ConstantTimeEq for BlockInteger<N, B> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        let mut equal = subtle::Choice::from(1);
        for i in 0..Self::UNITS {
            equal &= self.block(i).ct_eq(&other.block(i));
        }
        equal
    }
}

#[cfg(feature = "ct-maybe")]
impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    /// Constant-time `if choice { *self = other.clone() }`.
    pub fn conditional_assign(&mut self, other: &Self, choice: subtle::Choice) {
        use subtle::ConditionallySelectable;
        for i in 0..Self::UNITS {
            let selected = u64::conditional_select(&self.block(i), &other.block(i), choice);
            self.set_block(i, selected);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::fixtures::*;
    use crate::BlockInteger;
    use typenum::U100;

    #[test]
    fn equality() {
        assert_eq!(Int12::from(5i8), Int12::from_raw_bits(5));
        assert_ne!(Int12::from(5i8), Int12::from(-5i8));
        assert_eq!(Int12::default(), Int12::zero());
    }

    #[test]
    fn ordering() {
        let a = Int8::from(-3i8);
        let b = Int8::from(5i8);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert!(!(a > a.clone()));
        assert!(a >= a.clone());
        assert_eq!(a.partial_cmp(&a), Some(core::cmp::Ordering::Equal));
    }

    #[test]
    fn ordering_consistency() {
        let mut rng = XorShiftRng::default();
        for _ in 0..1000 {
            let a = Int12::random(&mut rng);
            let b = Int12::random(&mut rng);
            assert_eq!(a < b, (&a - &b).is_negative());
            assert_eq!(a == b, (&a - &b).is_zero());

            // no wrap-around within half the range
            let (x, y) = (rng.next_signed(11), rng.next_signed(11));
            assert_eq!(Int12::from(x).partial_cmp(&Int12::from(y)), x.partial_cmp(&y));
        }
    }

    #[test]
    fn from_natives() {
        // low N bits of the native
        assert_eq!(Int8::from(0x1234u16).to_i64(), 0x34);
        assert_eq!(Int12::from(-1i8).units(), &[0xFF, 0x0F]);
        // the sign fills every unit above the native width
        let x = Int128::from(-2i32);
        assert_eq!(x.units()[0], 0xFE);
        assert!(x.units()[1..].iter().all(|&unit| unit == 0xFF));
        assert!(x.is_negative());
        assert_eq!(x, -&Int128::from(2i8));
        assert_eq!(Int128::from(-1i64), -&Int128::one());
        let z = BlockInteger::<U100, u32>::from(i64::MIN);
        assert_eq!(z.units(), &[0, 0x8000_0000, 0xFFFF_FFFF, 0xF]);
        // unsigned natives never do
        let y = Int128::from(u64::MAX);
        assert!(y.is_positive());
        assert!(y.units()[8..].iter().all(|&unit| unit == 0x00));
        assert_eq!(i64::from(&x), -2);
    }

    #[test]
    fn wide_negation_commutes_with_conversion() {
        let mut rng = XorShiftRng::default();
        for _ in 0..500 {
            let native = rng.next_signed(63);
            assert_eq!(Int128::from(-native), -&Int128::from(native));
            assert_eq!(Int128x32::from(-native), -&Int128x32::from(native));
        }
    }

    #[test]
    fn conversion_round_trip() {
        for native in [i8::MIN, -100, -1, 0, 1, 100, i8::MAX].iter() {
            assert_eq!(i64::from(Int8::from(*native)), *native as i64);
        }
        for native in [-2048i64, -1000, -1, 0, 1, 2047].iter() {
            assert_eq!(Int12::from(*native).to_i64(), *native);
        }
        for native in [i64::MIN, -1, 0, i64::MAX].iter() {
            assert_eq!(Int64x32::from(*native).to_i64(), *native);
        }
        let mut rng = XorShiftRng::default();
        for _ in 0..1000 {
            let native = rng.next_i64();
            assert_eq!(Int64::from(native).to_i64(), native);
            assert_eq!(Int128x32::from(native).to_i64(), native);
        }
    }

    #[test]
    fn zeroize() {
        use zeroize::Zeroize;
        let mut x = Int64x32::from(-1i64);
        x.zeroize();
        assert!(x.is_zero());
    }

    #[test]
    #[cfg(feature = "ct-maybe")]
    fn constant_time() {
        use subtle::{Choice, ConstantTimeEq};

        let a = Int12::from(-7i8);
        let b = Int12::from(9i8);
        assert!(bool::from(a.ct_eq(&a.clone())));
        assert!(!bool::from(a.ct_eq(&b)));

        let mut c = a.clone();
        c.conditional_assign(&b, Choice::from(0));
        assert_eq!(c, a);
        c.conditional_assign(&b, Choice::from(1));
        assert_eq!(c, b);
    }
}
