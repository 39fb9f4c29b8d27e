use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that decides where the mines go once the first cell is known.
pub trait MinePlacer {
    /// Picks exactly `config.mines()` distinct cells, never `exclude`.
    fn choose(&mut self, config: GameConfig, exclude: Coord2) -> Result<Vec<Coord2>>;
}

/// Populates the mine layer of `grid`, keeping `exclude` safe.
///
/// Can only happen once per grid, a second call is a contract violation and fails with
/// [`GameError::AlreadyPlaced`]. The chosen layout is checked before the grid is touched.
pub fn place_mines<P: MinePlacer + ?Sized>(
    grid: &mut GridState,
    placer: &mut P,
    exclude: Coord2,
) -> Result<()> {
    if grid.phase() == MinePhase::Placed {
        return Err(GameError::AlreadyPlaced);
    }
    let exclude = grid.validate_coords(exclude)?;
    let config = grid.config();

    let mines = placer.choose(config, exclude)?;
    check_layout(config, exclude, &mines)?;

    for &coords in &mines {
        grid.set_mine(coords)?;
    }
    grid.mark_placed();
    log::debug!(
        "Placed {} mines on a {}x{} board, keeping {:?} safe",
        mines.len(),
        config.size(),
        config.size(),
        exclude
    );
    Ok(())
}

fn check_layout(config: GameConfig, exclude: Coord2, mines: &[Coord2]) -> Result<()> {
    if mines.len() != usize::from(config.mines()) {
        log::warn!(
            "Mine layout count mismatch, got: {}, expected: {}",
            mines.len(),
            config.mines()
        );
        return Err(GameError::InvalidConfiguration);
    }

    let mut seen: Array2<bool> = Array2::default((config.size(), config.size()).to_nd_index());
    for &coords in mines {
        let coords = config
            .validate_coords(coords)
            .map_err(|_| GameError::InvalidConfiguration)?;
        if coords == exclude || seen[coords.to_nd_index()] {
            log::warn!("Mine layout rejected at {:?}", coords);
            return Err(GameError::InvalidConfiguration);
        }
        seen[coords.to_nd_index()] = true;
    }
    Ok(())
}
