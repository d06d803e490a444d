// crates/vquant-core/src/signal/register.rs

use crate::profile::range::Shape;

/// Register widths are limited to `1..=32`; anything outside is clamped.
#[inline]
fn width(bits: u32) -> u32 {
    bits.clamp(1, 32)
}

#[inline]
fn mask(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Two's-complement word of `code`, truncated to `bits` (clamped to 1..=32).
#[inline]
pub fn to_register(code: i32, bits: u32) -> u32 {
    (code as u32) & mask(width(bits))
}

/// Reads a `bits`-wide register word back into a code. `bits` is clamped
/// to `1..=32`.
///
/// Unipolar words are read as plain unsigned values, saturating at
/// `i32::MAX` (only reachable with 32-bit words). Bipolar words are
/// sign-extended from bit `bits - 1`.
pub fn from_register(word: u32, bits: u32, shape: Shape) -> i32 {
    let bits = width(bits);
    let w = word & mask(bits);
    match shape {
        Shape::Unipolar => i32::try_from(w).unwrap_or(i32::MAX),
        Shape::Bipolar => {
            let shift = 32 - bits;
            ((w << shift) as i32) >> shift
        }
    }
}

/// Bytes needed to store a `bits`-wide word.
#[inline]
pub fn register_bytes(bits: u32) -> usize {
    bits.div_ceil(8) as usize
}

/// Register word formatted the way a bus analyzer shows it: `0x7fff`.
pub fn register_hex(word: u32, bits: u32) -> String {
    let digits = bits.div_ceil(4) as usize;
    format!("0x{word:0digits$x}")
}
