use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement by rejection sampling, reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn choose(&mut self, config: GameConfig, exclude: Coord2) -> Result<Vec<Coord2>> {
        let size = config.size();
        let wanted = usize::from(config.mines());
        let mut taken: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut mines = Vec::with_capacity(wanted);

        // terminates because a valid config always leaves a free cell besides `exclude`
        while mines.len() < wanted {
            let coords = (self.rng.random_range(0..size), self.rng.random_range(0..size));
            if coords == exclude || taken[coords.to_nd_index()] {
                log::trace!("Rejected mine sample at {:?}", coords);
                continue;
            }
            taken[coords.to_nd_index()] = true;
            mines.push(coords);
        }

        Ok(mines)
    }
}
