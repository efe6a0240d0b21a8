// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 30-bit Morton (Z-order) codes for points in the unit cube.
//!
//! Each axis is quantized to a 10-bit grid coordinate, the bits are spread so
//! that two zero bits follow each one, and the three spread values are
//! combined with X in the highest lane: `(x << 2) | (y << 1) | z`.
//!
//! Inputs outside `[0, 1]` are clamped, never rejected, so the code is a total
//! function usable directly as a sort key.

use crate::Vec3;

/// Bits of grid resolution per axis.
pub const BITS_PER_AXIS: u32 = 10;

/// Largest grid coordinate on any axis (`2^10 - 1`).
pub const GRID_MAX: u32 = (1 << BITS_PER_AXIS) - 1;

/// Spreads the low 10 bits of `v` so that bit `i` lands on bit `3 * i`.
///
/// Bits above the tenth are discarded.
pub const fn expand_bits(v: u32) -> u32 {
    let mut v = v & GRID_MAX;
    v = v.wrapping_mul(0x0001_0001) & 0xFF00_00FF;
    v = v.wrapping_mul(0x0000_0101) & 0x0F00_F00F;
    v = v.wrapping_mul(0x0000_0011) & 0xC30C_30C3;
    v = v.wrapping_mul(0x0000_0005) & 0x4924_9249;
    v
}

/// Inverse of [`expand_bits`]: gathers every third bit back into 10 bits.
pub const fn compact_bits(v: u32) -> u32 {
    let mut v = v & 0x0924_9249;
    v = (v ^ (v >> 2)) & 0x030C_30C3;
    v = (v ^ (v >> 4)) & 0x0300_F00F;
    v = (v ^ (v >> 8)) & 0xFF00_00FF;
    v = (v ^ (v >> 16)) & 0x0000_03FF;
    v
}

/// Interleaves integer grid coordinates; each is clamped to [`GRID_MAX`].
pub const fn morton3(x: u32, y: u32, z: u32) -> u32 {
    let x = if x > GRID_MAX { GRID_MAX } else { x };
    let y = if y > GRID_MAX { GRID_MAX } else { y };
    let z = if z > GRID_MAX { GRID_MAX } else { z };
    (expand_bits(x) << 2) | (expand_bits(y) << 1) | expand_bits(z)
}

/// Splits a Morton code back into `[x, y, z]` grid coordinates.
pub const fn decode(code: u32) -> [u32; 3] {
    [compact_bits(code >> 2), compact_bits(code >> 1), compact_bits(code)]
}

/// Maps a unit-cube coordinate to its grid cell: `clamp(c * 1024, 0, 1023)`
/// truncated toward zero. `NaN` maps to cell 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(c: f64) -> u32 {
    let scaled = (c * f64::from(GRID_MAX + 1)).clamp(0.0, f64::from(GRID_MAX));
    // `as` saturates and maps NaN to 0; the clamp keeps the value in range.
    scaled as u32
}

/// 30-bit Morton code of a point whose components lie in `[0, 1]`.
pub fn encode(v: &Vec3) -> u32 {
    morton3(quantize(v.x()), quantize(v.y()), quantize(v.z()))
}
