//! RNG module - uniform random piece selection
//!
//! Every spawn draws a kind uniformly at random with replacement; there is
//! deliberately no 7-bag shuffle, so repeats and droughts are possible.
//! Backed by a simple LCG so seeded games replay identically in tests.

use crate::core::tetromino::Kind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a piece kind, every kind equally likely.
    pub fn next_kind(&mut self) -> Kind {
        Kind::ALL[self.next_range(Kind::ALL.len() as u32) as usize]
    }
}
