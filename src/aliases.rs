//! Type aliases by bit-size.

use typenum::{U12, U128, U16, U32, U64, U8};

use crate::BlockInteger;

pub type Int8 = BlockInteger<U8, u8>;
pub type Int12 = BlockInteger<U12, u8>;
pub type Int16 = BlockInteger<U16, u8>;
pub type Int32 = BlockInteger<U32, u8>;
pub type Int64 = BlockInteger<U64, u8>;
pub type Int128 = BlockInteger<U128, u8>;

// fewer, wider units
pub type Int64x32 = BlockInteger<U64, u32>;
pub type Int128x32 = BlockInteger<U128, u32>;
