use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// What a single reveal did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub mine_hit: bool,
    /// Adjacency count of the revealed cell, meaningless when a mine was hit.
    pub mines_around: u8,
    pub uncovered_batch: Vec<UncoveredCell>,
    pub won: bool,
    /// Every mine on the board, only filled in when a mine was hit.
    pub mine_locations: Vec<Coord2>,
}

impl RevealResult {
    pub(crate) fn unchanged(mines_around: u8) -> Self {
        Self {
            mines_around,
            ..Default::default()
        }
    }

    pub(crate) fn exploded(mine_locations: Vec<Coord2>) -> Self {
        Self {
            mine_hit: true,
            mine_locations,
            ..Default::default()
        }
    }

    /// Whether this result could have caused an update to the board
    pub fn has_update(&self) -> bool {
        self.mine_hit || !self.uncovered_batch.is_empty()
    }
}

/// The game is won when the only covered cells left are the mines.
pub fn has_won(grid: &GridState) -> bool {
    grid.covered_count() == grid.mine_count()
}
