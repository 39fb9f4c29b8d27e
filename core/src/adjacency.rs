use crate::*;

/// Counts the mines in the 8-neighborhood of `coords`, cells past the edge are simply absent.
pub fn mines_around(grid: &GridState, coords: Coord2) -> Result<u8> {
    let coords = grid.validate_coords(coords)?;
    let count = neighbors(coords, grid.size())
        .filter(|&pos| grid.has_mine_at(pos))
        .count();
    // at most 8 neighbors
    Ok(count as u8)
}
