use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub,
    SubAssign,
};

use typenum::{Add1, B1};

use crate::{Block, BlockInteger, Width};

// The arithmetic lives in `OpAssign<&Self>` and `Op for &BlockInteger`,
// everything here forwards to those for owned operands.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident $(, $($bound:tt)+)?) => {
        impl<N, B> $OpAssign for BlockInteger<N, B>
        where
            N: Width<B>,
            B: Block,
            $($($bound)+)?
        {
            #[inline]
            fn $op_assign(&mut self, other: Self) {
                $OpAssign::$op_assign(self, &other);
            }
        }

        impl<N, B> $Op for BlockInteger<N, B>
        where
            N: Width<B>,
            B: Block,
            $($($bound)+)?
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: Self) -> Self::Output {
                $OpAssign::$op_assign(&mut self, &other);
                self
            }
        }

        impl<N, B> $Op<&BlockInteger<N, B>> for BlockInteger<N, B>
        where
            N: Width<B>,
            B: Block,
            $($($bound)+)?
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, other: &Self) -> Self::Output {
                $OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl<N, B> $Op<BlockInteger<N, B>> for &BlockInteger<N, B>
        where
            N: Width<B>,
            B: Block,
            $($($bound)+)?
        {
            type Output = BlockInteger<N, B>;

            #[inline]
            fn $op(self, other: BlockInteger<N, B>) -> Self::Output {
                $Op::$op(self, &other)
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign, N: Add<B1>, Add1<N>: Width<B>);
forward_binop!(Rem, rem, RemAssign, rem_assign, N: Add<B1>, Add1<N>: Width<B>);

impl<N: Width<B>, B: Block> Neg for BlockInteger<N, B> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<N: Width<B>, B: Block> Not for BlockInteger<N, B> {
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self::Output {
        self.flip();
        self
    }
}

impl<N: Width<B>, B: Block> Shl<isize> for BlockInteger<N, B> {
    type Output = Self;

    #[inline]
    fn shl(mut self, bits: isize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl<N: Width<B>, B: Block> Shr<isize> for BlockInteger<N, B> {
    type Output = Self;

    #[inline]
    fn shr(mut self, bits: isize) -> Self::Output {
        self >>= bits;
        self
    }
}

#[cfg(test)]
mod test {
    use crate::fixtures::*;

    #[test]
    fn owned_operands() {
        let a = Int16::from(-1000i16);
        let b = Int16::from(7i8);

        assert_eq!(a.clone() + b.clone(), &a + &b);
        assert_eq!(a.clone() - &b, &a - &b);
        assert_eq!(&a * b.clone(), &a * &b);
        assert_eq!(a.clone() / b.clone(), &a / &b);
        assert_eq!(a.clone() % &b, &a % &b);
        assert_eq!(-a.clone(), -&a);
        assert_eq!(!a.clone(), !&a);
        assert_eq!(a.clone() << 3, &a << 3);
        assert_eq!(a.clone() >> -3, &a << 3);
    }

    #[test]
    fn owned_assignment() {
        let mut x = Int12::from(100i8);
        x += Int12::from(20i8);
        x -= Int12::from(5i8);
        x *= Int12::from(3i8);
        assert_eq!(x.to_i64(), 345);
        x /= Int12::from(-10i8);
        assert_eq!(x.to_i64(), -34);
        x %= Int12::from(8i8);
        assert_eq!(x.to_i64(), -2);
    }

    #[test]
    fn expressions() {
        let mut rng = XorShiftRng::default();
        for _ in 0..200 {
            let (a, b, c) = (rng.next_signed(8), rng.next_signed(8), rng.next_signed(8));
            let (x, y, z) = (Int32::from(a), Int32::from(b), Int32::from(c));
            assert_eq!((x.clone() * y.clone() - z.clone() + x).to_i64(), a * b - c + a);
            if c != 0 {
                assert_eq!(((y.clone() << 4) / z.clone()).to_i64(), (b << 4) / c);
                assert_eq!((-y % z).to_i64(), -b % c);
            }
        }
    }
}
