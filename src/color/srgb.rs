//! sRGB8 <-> linear `f32` codec.
//!
//! Decoding is a 256-entry table. Encoding approximates the sRGB transfer curve with
//! 104 linear segments indexed by the float's exponent and top three mantissa bits, which
//! keeps the result within 0.544 of the exact curve (in 8-bit units), round-trips every
//! code exactly, and is monotonic.

use super::tables::{LINEAR_TO_SRGB8_SEGMENTS, SRGB8_TO_LINEAR_BITS};

// 1 - eps: the largest input that still indexes the table.
const ALMOST_ONE_BITS: u32 = 0x3f7f_ffff;
// 2^-13: everything below rounds to code 0.
const MIN_VAL_BITS: u32 = (127 - 13) << 23;

/// Linear value of an sRGB8 code.
pub fn decode_srgb8(code: u8) -> f32 {
    f32::from_bits(SRGB8_TO_LINEAR_BITS[usize::from(code)])
}

/// sRGB8 code for a linear value.
///
/// Negative values and NaN map to `0`; values `>= 1` map to `255`.
pub fn encode_srgb8(linear: f32) -> u8 {
    let min_val = f32::from_bits(MIN_VAL_BITS);
    let almost_one = f32::from_bits(ALMOST_ONE_BITS);

    let mut x = linear;
    if x.is_nan() || x <= min_val {
        x = min_val;
    }
    if x > almost_one {
        x = almost_one;
    }

    let bits = x.to_bits();
    let segment = LINEAR_TO_SRGB8_SEGMENTS[((bits - MIN_VAL_BITS) >> 20) as usize];
    let bias = (segment >> 16) << 9;
    let scale = segment & 0xffff;

    // Interpolate on the next eight mantissa bits.
    let t = (bits >> 12) & 0xff;
    ((bias + scale * t) >> 16) as u8
}

/// Encode an RGB triple, appending an opaque alpha.
pub fn encode_rgb_opaque(rgb: [f32; 3]) -> [u8; 4] {
    [
        encode_srgb8(rgb[0]),
        encode_srgb8(rgb[1]),
        encode_srgb8(rgb[2]),
        255,
    ]
}

/// Exact (unrounded) sRGB value of `linear`, scaled to `[0, 255]`.
pub fn reference_srgb8(linear: f32) -> f32 {
    let s = if linear.is_nan() || linear <= 0.0 {
        0.0
    } else if linear <= 0.003_130_8 {
        12.92 * linear
    } else if linear < 1.0 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        1.0
    };
    s * 255.0
}

#[cfg(test)]
#[path = "../../tests/unit/color/srgb.rs"]
mod tests;
