//! Random source abstraction for blip scheduling.
//!
//! The engine only needs uniform integer draws for inter-blip delays, so the
//! capability is kept as narrow as the hardware counterpart (a `random(low,
//! high)` call). A small `SplitMix64` generator is provided for platforms
//! without a hardware RNG.

/// Uniform integer random source
pub trait RandomSource {
    /// Draw a uniform integer in `[low, high)`
    ///
    /// Returns `low` when the range is empty.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// SplitMix64 pseudo-random generator
///
/// Deterministic for a given seed, which keeps animation behavior
/// reproducible in tests and previews.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a new generator from a seed
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and fold the mixed value down to 32 bits
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u32
    }
}

impl RandomSource for SplitMix64 {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = high - low;
        low + self.next_u32() % span
    }
}
