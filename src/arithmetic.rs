//! Wrapping arithmetic modulo $2^N$.
//!
//! Every operator works unit by unit with an explicit carry, widening each unit
//! to `u64`, and re-trims the most significant unit afterwards. Overflow is
//! silently discarded, as for `core::num::Wrapping`. When the exact result is
//! needed, [`widened_add`] and [`widened_multiply`] return a wider integer instead.
//!
//! Division is the exception: a zero divisor is reported by [`divide`] as
//! [`Error::DivisionByZero`][crate::Error::DivisionByZero], and the `/`, `%`
//! operators panic like the native integers do.

use crate::{Block, BlockInteger, Width};

mod shift;
mod add;
mod subtract;
mod multiply;
mod divide;
mod impls;

pub use add::widened_add;
pub use divide::divide;
pub use multiply::widened_multiply;

/// Quotient and remainder of a signed division, see [`divide`].
///
/// The remainder takes the sign of the dividend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoRem<N, B>
where
    N: Width<B>,
    B: Block,
{
    pub quotient: BlockInteger<N, B>,
    pub remainder: BlockInteger<N, B>,
}

/// The additive inverse, one's complement plus one.
///
/// The most negative value is its own two's complement.
pub fn twos_complement<N: Width<B>, B: Block>(x: &BlockInteger<N, B>) -> BlockInteger<N, B> {
    let mut negated = x.clone();
    negated.flip();
    negated += &BlockInteger::one();
    negated
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn twos_complement_of_extremes() {
        assert!(twos_complement(&Int8::zero()).is_zero());
        assert_eq!(twos_complement(&Int8::from(-128i8)), Int8::from(-128i8));
        assert_eq!(twos_complement(&Int12::from(2047i64)).to_i64(), -2047);
    }

    #[test]
    fn invariant_holds_after_every_operation() {
        let mut rng = XorShiftRng::default();
        for _ in 0..200 {
            let a = Int12::random(&mut rng);
            let b = Int12::random(&mut rng);
            let s = (rng.next_u32() % 16) as isize;

            assert_trimmed(&(&a + &b));
            assert_trimmed(&(&a - &b));
            assert_trimmed(&(&a * &b));
            assert_trimmed(&-&a);
            assert_trimmed(&!&a);
            assert_trimmed(&(&a << s));
            assert_trimmed(&(&a >> s));
            if !b.is_zero() {
                assert_trimmed(&(&a / &b));
                assert_trimmed(&(&a % &b));
            }
        }
    }
}
