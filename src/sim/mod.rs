//! Domain model: blocks, viruses, and the game world
//!
//! Pure state and rules with no rendering or input dependencies. The
//! interactive core reads and writes this model; the app shell only reads it.

pub mod block;
pub mod virus;

pub use block::{Block, BlockId, BlockKind, TransferError, starting_blocks, transfer};
pub use virus::{Industry, ReleaseRule, StandardReleaseRule, Stats, Virus};

/// Game world state
///
/// Held by the controller but not driven by it; the frame loop ticks it.
pub struct World {
    /// Total number of simulation ticks elapsed
    tick_count: u64,
    /// Total simulation time elapsed in seconds
    sim_time: f64,
    /// Random number generator seed
    rng_seed: u64,
}

impl World {
    /// Creates a new game world with a random seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a specific RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Advances the world simulation by one tick
    pub fn tick(&mut self, delta_time: f32) {
        self.tick_count += 1;
        self.sim_time += delta_time as f64;
    }

    /// Returns the current tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the total simulation time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Returns the RNG seed
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            tick_count: 0,
            sim_time: 0.0,
            rng_seed: rand::random(),
        }
    }
}
