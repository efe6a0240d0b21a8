// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Seeded `xoroshiro128+` generator for sampling test geometry.
///
/// Two generators built from the same seed produce the same stream on every
/// platform. The output is statistically decent and trivially predictable, so
/// it must never be used where an attacker could benefit from guessing it.
/// Sampling helpers in this crate take a `&mut Prng`; nothing reads a hidden
/// global generator.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

/// SplitMix64 increment (`2^64 / phi`). Also stands in for the all-zero
/// state, which xoroshiro never leaves.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Generator whose 128-bit state is `(s0, s1)`.
    ///
    /// `(0, 0)` is accepted and remapped to a usable state.
    pub fn from_seed(s0: u64, s1: u64) -> Self {
        let state = if s0 == 0 && s1 == 0 {
            [GOLDEN_GAMMA, 0]
        } else {
            [s0, s1]
        };
        Self { state }
    }

    /// Generator seeded from one word: two SplitMix64 outputs fill the
    /// state, which then goes through [`Prng::from_seed`].
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut counter = seed;
        let mut draw = || {
            counter = counter.wrapping_add(GOLDEN_GAMMA);
            let mut z = counter;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        };
        let s0 = draw();
        let s1 = draw();
        Self::from_seed(s0, s1)
    }

    /// Advances the state and returns 64 raw bits.
    pub fn next_u64(&mut self) -> u64 {
        let [s0, s1] = self.state;
        let out = s0.wrapping_add(s1);
        let mixed = s1 ^ s0;
        self.state = [s0.rotate_left(55) ^ mixed ^ (mixed << 14), mixed.rotate_left(36)];
        out
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The high 52 bits of the output fill the mantissa of a double in
    /// `[1, 2)`, which is then shifted down by one.
    pub fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64();
        let bits = (raw >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Returns a float in `[min, max)` (or `[max, min)` when reversed).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Samples a point in the axis-aligned cube of half-size `radius` centered on
/// `center`, one independent uniform draw per axis.
pub fn random_sphere_point(rng: &mut Prng, center: Vec3, radius: f64) -> Vec3 {
    Vec3::new(
        rng.next_range(center.x() - radius, center.x() + radius),
        rng.next_range(center.y() - radius, center.y() + radius),
        rng.next_range(center.z() - radius, center.z() + radius),
    )
}

/// Samples a point on the `y = 0` plane within `radius` of `center` along X
/// and Z. `center.y` is ignored.
pub fn random_circle_point(rng: &mut Prng, center: Vec3, radius: f64) -> Vec3 {
    Vec3::new(
        rng.next_range(center.x() - radius, center.x() + radius),
        0.0,
        rng.next_range(center.z() - radius, center.z() + radius),
    )
}
