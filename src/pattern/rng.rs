//! Seeded generator shared by grid and color construction
//!
//! The stream is PCG64, whose output is fixed by its definition: a seed maps
//! to the same pattern on every platform and across `rand` releases.

use crate::color::Rgb;
use crate::io::configuration::CELL_ON_THRESHOLD;
use crate::seed::Seed;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Seeded random source for one pattern construction
///
/// Every draw advances a single stream, so the order of calls is part of the
/// output contract.
#[derive(Debug, Clone)]
pub struct PatternRng {
    rng: Pcg64,
}

impl PatternRng {
    /// Create a generator positioned at the start of the seed's stream
    pub fn new(seed: &Seed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
        }
    }

    /// Draw one cell state
    pub fn draw_cell(&mut self) -> bool {
        self.rng.random::<f64>() >= CELL_ON_THRESHOLD
    }

    /// Draw one color from the top three bytes of a 64-bit word
    pub fn draw_rgb(&mut self) -> Rgb {
        let [r, g, b, ..] = self.rng.next_u64().to_be_bytes();
        Rgb::new(r, g, b)
    }
}
