use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A cell uncovered by a single move together with its adjacency count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UncoveredCell {
    pub x: Coord,
    pub y: Coord,
    pub mines_around: u8,
}

impl UncoveredCell {
    pub const fn new((x, y): Coord2, mines_around: u8) -> Self {
        Self { x, y, mines_around }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }
}

/// Uncovers the region connected to `seed` through zero-count cells.
///
/// Zero-count cells keep the fill going, numbered cells bordering the region are uncovered but
/// stop it there. Cells that were uncovered by earlier moves are not reported again, the seed
/// always is. A seed with a positive count only uncovers itself.
///
/// The traversal order is unspecified, only the resulting set is.
pub fn flood(grid: &mut GridState, seed: Coord2) -> Result<Vec<UncoveredCell>> {
    let seed = grid.validate_coords(seed)?;
    debug_assert!(!grid.has_mine_at(seed), "flood must not start on a mine");

    let size = grid.size();
    let mut in_batch: Array2<bool> = Array2::default((size, size).to_nd_index());
    let mut batch = Vec::new();
    let mut to_visit = vec![seed];

    while let Some(visit_coords) = to_visit.pop() {
        if in_batch[visit_coords.to_nd_index()] {
            continue;
        }

        let visit_count = mines_around(grid, visit_coords)?;
        in_batch[visit_coords.to_nd_index()] = true;
        grid.set_uncovered(visit_coords)?;
        batch.push(UncoveredCell::new(visit_coords, visit_count));
        log::trace!(
            "Flood uncovered {:?}, mines around: {}",
            visit_coords,
            visit_count
        );

        if visit_count > 0 {
            continue;
        }

        for pos in neighbors(visit_coords, size) {
            if in_batch[pos.to_nd_index()] || grid.is_uncovered(pos)? {
                continue;
            }

            let count = mines_around(grid, pos)?;
            if count == 0 {
                to_visit.push(pos);
            } else {
                in_batch[pos.to_nd_index()] = true;
                grid.set_uncovered(pos)?;
                batch.push(UncoveredCell::new(pos, count));
                log::trace!("Flood stopped at {:?}, mines around: {}", pos, count);
            }
        }
    }

    log::debug!("Flood from {:?} uncovered {} cells", seed, batch.len());
    Ok(batch)
}
