//! Fixed-width two's complement integers, stored in an array of small blocks.
//!
//! A [`BlockInteger<N, B>`][BlockInteger] has exactly `N` bits, held in
//! `ceil(N / W)` units of `B` (`u8`, `u16` or `u32`, so `W` is 8, 16 or 32).
//! Carries across units are explicit, bits above `N` are always zero, and all
//! arithmetic wraps modulo $2^N$. This is the engine for manipulating
//! significands and exponents of custom number formats at bit granularity.
//!
//! ```
//! use blockint::{divide, Int8};
//!
//! let a = Int8::from(-128i8);
//! let b = Int8::from(-1i8);
//! let qr = divide(&a, &b).unwrap();
//! assert_eq!(qr.quotient.to_i64(), -128);
//! assert!(qr.remainder.is_zero());
//! ```
#![cfg_attr(not(test), no_std)]

mod aliases;
pub use aliases::*;
mod arithmetic;
pub use arithmetic::{divide, twos_complement, widened_add, widened_multiply, QuoRem};
mod block;
pub use block::{Block, UnitsFor, Width};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{BinaryDisplay, BlockInteger, HexDisplay};

/// The widths are [`typenum`] numbers.
pub use typenum;

#[cfg(test)]
mod fixtures;
