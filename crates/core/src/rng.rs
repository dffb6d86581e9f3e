//! RNG module - food placement
//!
//! Food is dropped on a uniformly random grid cell. The generator is a small
//! LCG so a game can be replayed from its seed (tests, benches, `SNAKE_SEED`).

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Cell;

/// Linear congruential generator with the Numerical Recipes constants
#[derive(Debug, Clone)]
pub struct FoodRng {
    state: u32,
}

impl FoodRng {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stay degenerate for the first draws.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`; `max == 0` yields 0
    ///
    /// Takes the high bits (multiply-shift) since the low bits of an LCG
    /// have a short period.
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform cell in `[0, width) x [0, height)`
    pub fn next_cell(&mut self, width: u16, height: u16) -> Cell {
        let x = self.next_below(width as u32) as i32;
        let y = self.next_below(height as u32) as i32;
        Cell::new(x, y)
    }

    /// Current internal state (enough to resume the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for FoodRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the current time, folded to 32 bits
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let nanos = d.as_nanos();
            (nanos as u32) ^ ((nanos >> 32) as u32)
        })
        .unwrap_or(1)
}
