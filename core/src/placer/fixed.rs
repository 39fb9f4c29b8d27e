use super::*;

/// Placement with a layout chosen up front, used for replays and deterministic boards.
///
/// The layout still goes through the same checks as any other placement, so it must not include
/// the first revealed cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn choose(&mut self, _config: GameConfig, _exclude: Coord2) -> Result<Vec<Coord2>> {
        Ok(self.mines.clone())
    }
}
