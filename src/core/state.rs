//! # Simulation State
//!
//! Everything the event loop owns, in one place. No TUI types here;
//! presentation settings live in the `tui` module.
//!
//! ```text
//! Simulation
//! ├── grid: Grid          // cells + cursor
//! ├── paused: bool        // ticks are ignored while true
//! ├── generation: u64     // updates applied since start or last reseed
//! └── rng: StdRng         // source for reseeding
//! ```
//!
//! State changes only happen through `update(sim, action)` in action.rs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::grid::{Grid, GridError};

pub struct Simulation {
    pub grid: Grid,
    pub paused: bool,
    pub generation: u64,
    pub rng: StdRng,
}

impl Simulation {
    pub fn new(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            paused: false,
            generation: 0,
            rng,
        }
    }

    /// Build the startup board: a `width`×`height` grid, immediately randomized.
    ///
    /// With `seed` the board is reproducible; without it the RNG is seeded
    /// from the operating system.
    pub fn seeded(width: usize, height: usize, seed: Option<u64>) -> Result<Self, GridError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sim = Self::new(Grid::new(width, height)?, rng);
        sim.grid.randomize(&mut sim.rng);
        Ok(sim)
    }
}
