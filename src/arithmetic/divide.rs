use core::ops::{Add, Div, DivAssign, Rem, RemAssign};

use typenum::{Add1, B1};

use super::QuoRem;
use crate::{Block, BlockInteger, Error, Result, Width};

/// Signed restoring long division: `a = quotient * b + remainder`.
///
/// The quotient is truncated towards zero and the remainder has the sign of `a`.
/// As everywhere else this wraps, so `MIN / -1 == MIN` with a zero remainder.
///
/// The magnitudes are taken in `N + 1` bits, since the most negative value
/// has no positive counterpart in `N` bits.
pub fn divide<N, B>(a: &BlockInteger<N, B>, b: &BlockInteger<N, B>) -> Result<QuoRem<N, B>>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let a_negative = a.is_negative();
    let b_negative = b.is_negative();
    let result_negative = a_negative ^ b_negative;

    // normalize to positive, which requires expansion by 1 bit
    let magnitude_a: BlockInteger<Add1<N>, B> = if a_negative { (-a).resize() } else { a.resize() };
    let magnitude_b: BlockInteger<Add1<N>, B> = if b_negative { (-b).resize() } else { b.resize() };

    if magnitude_a < magnitude_b {
        return Ok(QuoRem {
            quotient: BlockInteger::zero(),
            remainder: a.clone(),
        });
    }

    // both are non-zero here, so both have a most significant bit
    let shift = match (magnitude_a.msb(), magnitude_b.msb()) {
        (Some(msb_a), Some(msb_b)) => msb_a - msb_b,
        _ => unreachable!(),
    };

    let mut accumulator = magnitude_a;
    let mut subtractand = magnitude_b;
    subtractand <<= shift as isize;

    let mut quotient = BlockInteger::<N, B>::zero();
    for i in (0..=shift).rev() {
        if subtractand <= accumulator {
            accumulator -= &subtractand;
            quotient.put_bit(i, true);
        }
        subtractand >>= 1;
    }

    if result_negative {
        quotient = -&quotient;
    }

    let remainder: BlockInteger<N, B> = accumulator.resize();
    let remainder = if a_negative { -&remainder } else { remainder };

    Ok(QuoRem { quotient, remainder })
}

impl<N, B> BlockInteger<N, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    /// Quotient, or [`Error::DivisionByZero`].
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        divide(self, divisor).map(|qr| qr.quotient)
    }

    /// Remainder with the sign of `self`, or [`Error::DivisionByZero`].
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        divide(self, divisor).map(|qr| qr.remainder)
    }
}

impl<N, B> DivAssign<&Self> for BlockInteger<N, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    /// Panics if the divisor is zero.
    fn div_assign(&mut self, divisor: &Self) {
        match self.checked_div(divisor) {
            Ok(quotient) => *self = quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<N, B> RemAssign<&Self> for BlockInteger<N, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    /// Panics if the divisor is zero.
    fn rem_assign(&mut self, divisor: &Self) {
        match self.checked_rem(divisor) {
            Ok(remainder) => *self = remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<N, B> Div for &BlockInteger<N, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    type Output = BlockInteger<N, B>;

    fn div(self, divisor: Self) -> Self::Output {
        let mut quotient = self.clone();
        quotient /= divisor;
        quotient
    }
}

impl<N, B> Rem for &BlockInteger<N, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    type Output = BlockInteger<N, B>;

    fn rem(self, divisor: Self) -> Self::Output {
        let mut remainder = self.clone();
        remainder %= divisor;
        remainder
    }
}
