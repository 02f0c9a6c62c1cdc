use core::ops::{Add, AddAssign};

use typenum::{Add1, B1};

use crate::{Block, BlockInteger, Width};

// Add with carry:
#[inline]
pub fn adc<B: Block>(a: B, b: B, acc: &mut u64) -> B {
    *acc += a.widen();
    *acc += b.widen();
    let lo = B::truncate(*acc);
    *acc >>= B::BITS;
    lo
}

/// Ripple-carry addition of equally sized unit slices, returning the carry out.
pub(crate) fn add_assign_carry<B: Block>(a: &mut [B], b: &[B]) -> u64 {
    debug_assert_eq!(a.len(), b.len());

    let mut carry = 0;
    for (a, b) in a.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }
    carry
}

// Addition modulo 2^N

impl<N: Width<B>, B: Block> AddAssign<&Self> for BlockInteger<N, B> {
    fn add_assign(&mut self, summand: &Self) {
        // the carry out of the top unit is exactly what wraps
        add_assign_carry(&mut self.blocks, &summand.blocks);
        self.trim();
    }
}

impl<N: Width<B>, B: Block> Add for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += summand;
        sum
    }
}

/// Unrounded addition, exact in `N + 1` bits.
///
/// Operands are zero-extended, i.e. taken as unsigned magnitudes.
pub fn widened_add<N, B>(a: &BlockInteger<N, B>, b: &BlockInteger<N, B>) -> BlockInteger<Add1<N>, B>
where
    N: Width<B> + Add<B1>,
    Add1<N>: Width<B>,
    B: Block,
{
    let mut sum: BlockInteger<Add1<N>, B> = a.resize();
    sum += &b.resize::<Add1<N>>();
    sum
}
