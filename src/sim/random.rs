//! Injectable random source
//!
//! The simulation never reaches for a global RNG. Everything random (spawn
//! gate, star placement, fall speed, tint) is drawn through [`RandomSource`],
//! so a run is reproducible from its seed and tests can script exact draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of random draws for the simulation
pub trait RandomSource {
    /// Uniform float in [0, 1)
    fn next_unit(&mut self) -> f32;

    /// Uniform integer in [0, bound). Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Uniform float in [lo, hi)
    fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.random_range(0..bound)
    }
}

/// Create the seeded generator used for a session
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays fixed sequences of draws, cycling when exhausted.
///
/// Unit draws and integer draws come from separate scripts so a test can pin
/// the spawn gate independently of star placement.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    units: Vec<f32>,
    ints: Vec<u32>,
    unit_cursor: usize,
    int_cursor: usize,
}

impl ScriptedRandom {
    pub fn new(units: Vec<f32>, ints: Vec<u32>) -> Self {
        Self {
            units,
            ints,
            unit_cursor: 0,
            int_cursor: 0,
        }
    }

    /// Every unit draw returns `unit`, every integer draw returns `int`
    pub fn constant(unit: f32, int: u32) -> Self {
        Self::new(vec![unit], vec![int])
    }

    /// Number of integer draws taken so far
    pub fn int_draws(&self) -> usize {
        self.int_cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        // Keep scripted values inside the half-open contract
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 || self.ints.is_empty() {
            self.int_cursor += 1;
            return 0;
        }
        let value = self.ints[self.int_cursor % self.ints.len()];
        self.int_cursor += 1;
        value % bound
    }
}
