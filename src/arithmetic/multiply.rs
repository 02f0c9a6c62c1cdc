use core::ops::{Mul, MulAssign};

use typenum::{Prod, U2};

use crate::{Block, BlockInteger, Width};

/// Shift-and-add: walk the bits of `multiplier`, adding the progressively
/// doubled `multiplicand` into `product`. Truncates to the width of `product`.
fn shift_and_add<N, M, B>(
    product: &mut BlockInteger<M, B>,
    multiplier: &BlockInteger<N, B>,
    mut multiplicand: BlockInteger<M, B>,
)
where
    N: Width<B>,
    M: Width<B>,
    B: Block,
{
    product.set_zero();
    for i in 0..BlockInteger::<N, B>::BITS {
        if multiplier.bit(i) {
            *product += &multiplicand;
        }
        multiplicand <<= 1;
    }
}

impl<N: Width<B>, B: Block> MulAssign<&Self> for BlockInteger<N, B> {
    /// Modulo $2^N$, two's complement makes this correct for signed operands too.
    fn mul_assign(&mut self, factor: &Self) {
        let multiplier = self.clone();
        // `+=` already trims
        shift_and_add(self, &multiplier, factor.clone());
    }
}

impl<N: Width<B>, B: Block> Mul for &BlockInteger<N, B> {
    type Output = BlockInteger<N, B>;

    fn mul(self, factor: Self) -> Self::Output {
        let mut product = self.clone();
        product *= factor;
        product
    }
}

/// Unrounded multiplication, the full product in `2N` bits.
///
/// Operands are zero-extended, i.e. taken as unsigned magnitudes.
pub fn widened_multiply<N, B>(
    a: &BlockInteger<N, B>,
    b: &BlockInteger<N, B>,
) -> BlockInteger<Prod<N, U2>, B>
where
    N: Width<B> + Mul<U2>,
    Prod<N, U2>: Width<B>,
    B: Block,
{
    let mut product = BlockInteger::zero();
    shift_and_add(&mut product, a, b.resize());
    product
}
