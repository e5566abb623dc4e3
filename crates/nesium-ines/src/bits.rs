//! Single-bit helpers shared by the header decoder and the report.

use crate::error::Error;

/// Returns bit `pos` of `value`, where `0` is the least significant bit.
///
/// Positions outside `0..=7` are rejected with [`Error::InvalidBitPosition`].
/// Every call site inside this crate uses a constant position, so hitting the
/// error means a programming mistake rather than a malformed ROM.
pub fn bit_at(value: u8, pos: i32) -> Result<bool, Error> {
    if !(0..8).contains(&pos) {
        return Err(Error::InvalidBitPosition(pos));
    }
    Ok((value >> pos) & 0x01 != 0)
}

/// High nibble of `value`, shifted down into the low four bits.
#[inline]
pub const fn high_nibble(value: u8) -> u8 {
    (value >> 4) & 0x0F
}
