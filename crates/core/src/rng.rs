//! RNG module - pluggable random source and block generation
//!
//! The engine never touches a global generator. Everything random is drawn
//! through [`RandomSource`], so a seeded [`SimpleRng`] replays identical games
//! and tests can script exact shape/color sequences.

use crate::block::{Block, BlockSet};
use crate::shapes;
use crate::types::{ColorId, PALETTE_SIZE};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

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

    /// Current internal state; feeding it to [`SimpleRng::new`] resumes the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG cycle quickly; hand out the high half.
        self.state >> 16
    }
}

/// Samples blocks: one catalogue shape plus an independent color id.
#[derive(Debug, Clone)]
pub struct BlockGenerator<R = SimpleRng> {
    rng: R,
    palette_size: ColorId,
}

impl BlockGenerator<SimpleRng> {
    /// Create a seeded generator using the default palette
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed), PALETTE_SIZE)
    }
}

impl<R: RandomSource> BlockGenerator<R> {
    pub fn new(rng: R, palette_size: ColorId) -> Self {
        Self {
            rng,
            palette_size: palette_size.max(1),
        }
    }

    /// Draw a single fresh (unused) block
    pub fn next_block(&mut self) -> Block {
        let shape = shapes::sample(&mut self.rng);
        let color = 1 + self.rng.next_range(self.palette_size as u32) as ColorId;
        Block::new(shape, color)
    }

    /// Draw a complete tray of `count` fresh blocks
    pub fn next_set(&mut self, count: usize) -> BlockSet {
        let mut set = BlockSet::new();
        for _ in 0..count.min(set.capacity()) {
            set.push(self.next_block());
        }
        set
    }
}

impl Default for BlockGenerator<SimpleRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
