//! Human-readable renderings, most significant bit first.
//!
//! These are pure formatters borrowing the number; nothing is allocated.

use core::fmt::{self, Write};

use super::BlockInteger;
use crate::{Block, Width};

const UPPER: &[u8; 16] = b"0123456789ABCDEF";
const LOWER: &[u8; 16] = b"0123456789abcdef";

/// `b0000'0101`, see [`BlockInteger::to_binary`].
pub struct BinaryDisplay<'a, N: Width<B>, B: Block> {
    number: &'a BlockInteger<N, B>,
    separators: bool,
}

/// `0x0'FF`, see [`BlockInteger::to_hex`].
pub struct HexDisplay<'a, N: Width<B>, B: Block> {
    number: &'a BlockInteger<N, B>,
    separators: bool,
}

impl<N: Width<B>, B: Block> BlockInteger<N, B> {
    /// All `N` bits prefixed by `b`, with a `'` every four bits if `separators`.
    pub fn to_binary(&self, separators: bool) -> BinaryDisplay<'_, N, B> {
        BinaryDisplay { number: self, separators }
    }

    /// All nibbles prefixed by `0x`, with a `'` at unit boundaries if `separators`.
    pub fn to_hex(&self, separators: bool) -> HexDisplay<'_, N, B> {
        HexDisplay { number: self, separators }
    }

    fn write_bits(&self, f: &mut fmt::Formatter<'_>, separators: bool) -> fmt::Result {
        for i in (0..Self::BITS).rev() {
            f.write_char(if self.bit(i) { '1' } else { '0' })?;
            if separators && i > 0 && i % 4 == 0 {
                f.write_char('\'')?;
            }
        }
        Ok(())
    }

    fn write_nibbles(
        &self,
        f: &mut fmt::Formatter<'_>,
        separators: bool,
        digits: &[u8; 16],
    ) -> fmt::Result {
        for n in (0..Self::NIBBLES).rev() {
            f.write_char(digits[self.nibble_unchecked(n) as usize] as char)?;
            if separators && n > 0 && (4 * n) % B::BITS == 0 {
                f.write_char('\'')?;
            }
        }
        Ok(())
    }
}

impl<N: Width<B>, B: Block> fmt::Display for BinaryDisplay<'_, N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('b')?;
        self.number.write_bits(f, self.separators)
    }
}

impl<N: Width<B>, B: Block> fmt::Display for HexDisplay<'_, N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        self.number.write_nibbles(f, self.separators, UPPER)
    }
}

/// Exactly `N` digits, `0b` prefix with `{:#b}`.
impl<N: Width<B>, B: Block> fmt::Binary for BlockInteger<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        self.write_bits(f, false)
    }
}

/// All nibbles, `0x` prefix with `{:#X}`.
impl<N: Width<B>, B: Block> fmt::UpperHex for BlockInteger<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.write_nibbles(f, false, UPPER)
    }
}

impl<N: Width<B>, B: Block> fmt::LowerHex for BlockInteger<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.write_nibbles(f, false, LOWER)
    }
}

#[cfg(not(feature = "hex-debug"))]
impl<N: Width<B>, B: Block> fmt::Debug for BlockInteger<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockInteger")
            .field(&format_args!("{}", self.to_hex(true)))
            .finish()
    }
}

/// The units as big-endian bytes, most significant unit first.
#[cfg(feature = "hex-debug")]
impl<N: Width<B>, B: Block> fmt::Debug for BlockInteger<N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlockInteger(")?;
        for i in (0..Self::UNITS).rev() {
            let bytes = self.block(i).to_be_bytes();
            write!(f, "{}", delog::hexstr!(&bytes[8 - B::BITS / 8..]))?;
            if i > 0 {
                f.write_char('\'')?;
            }
        }
        f.write_char(')')
    }
}
