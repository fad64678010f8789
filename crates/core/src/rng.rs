//! RNG module - seeded shuffling for deck construction
//!
//! A small LCG keeps deals reproducible from a seed (handy for tests and for
//! replaying a reported game). Range sampling takes the high bits of the
//! 64-bit product and rejects the biased tail, so `shuffle` is a uniform
//! Fisher-Yates permutation.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// Seed 0 is replaced by [`SimpleRng::ZERO_SEED`], so it deals its own game
    /// rather than repeating seed 1.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::ZERO_SEED } else { seed };
        Self { state }
    }

    /// State used for a zero seed.
    pub const ZERO_SEED: u32 = 0x9E37_79B9;

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniformly distributed value in `[0, max)`.
    ///
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max == 0");
        // Lemire's multiply-shift: the low bits of an LCG are weak, so take the
        // high word, and reject products whose low word falls in the short tail.
        let threshold = max.wrapping_neg() % max;
        loop {
            let m = u64::from(self.next_u32()) * u64::from(max);
            if (m as u32) >= threshold {
                return (m >> 32) as u32;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state; feeding it back to [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
