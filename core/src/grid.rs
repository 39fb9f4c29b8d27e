use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Mine placement is deferred until the first reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MinePhase {
    Unplaced,
    Placed,
}

impl Default for MinePhase {
    fn default() -> Self {
        Self::Unplaced
    }
}

/// Mine layer and covered/uncovered layer of a square board.
///
/// Both layers are indexed by `(x, y)`. Uncovering is monotonic and the number of still-covered
/// cells is tracked alongside the layer so win detection does not need to scan the board.
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    config: GameConfig,
    mines: Array2<bool>,
    uncovered: Array2<bool>,
    covered_count: CellCount,
    phase: MinePhase,
}

impl GridState {
    pub fn new(config: GameConfig) -> Self {
        let shape = (config.size(), config.size()).to_nd_index();
        Self {
            config,
            mines: Array2::default(shape),
            uncovered: Array2::default(shape),
            covered_count: config.total_cells(),
            phase: Default::default(),
        }
    }

    pub fn with_size(size: Coord, mines: CellCount) -> Result<Self> {
        GameConfig::new(size, mines).map(Self::new)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size()
    }

    /// Number of mines the board holds once placement happened.
    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn covered_count(&self) -> CellCount {
        self.covered_count
    }

    pub fn phase(&self) -> MinePhase {
        self.phase
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.mines[coords.to_nd_index()])
    }

    pub fn is_uncovered(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.uncovered[coords.to_nd_index()])
    }

    pub fn set_mine(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.mines[coords.to_nd_index()] = true;
        Ok(())
    }

    /// Uncovers a cell, returns whether it was still covered.
    pub fn set_uncovered(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.uncovered[coords.to_nd_index()];
        if *cell {
            return Ok(false);
        }
        *cell = true;
        self.covered_count -= 1;
        Ok(true)
    }

    pub fn placed_mine_count(&self) -> CellCount {
        self.mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Coordinates of every mine, row by row.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        let size = self.size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&coords| self.mines[coords.to_nd_index()])
            .collect()
    }

    pub(crate) fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mines[coords.to_nd_index()]
    }

    pub(crate) fn mark_placed(&mut self) {
        self.phase = MinePhase::Placed;
    }
}
