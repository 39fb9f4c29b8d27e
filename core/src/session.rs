use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// One game from configuration to terminal outcome.
///
/// The session exclusively owns its board. Mines are placed on the first accepted reveal, so the
/// first revealed cell is never a mine.
#[derive(Clone, Debug)]
pub struct GameSession<P = RandomMinePlacer> {
    grid: GridState,
    placer: P,
    move_count: u32,
    outcome: Outcome,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_placer(config, RandomMinePlacer::new(seed))
    }
}

impl<P: MinePlacer> GameSession<P> {
    /// Uses `placer` to lay out the mines on the first reveal.
    ///
    /// A layout that puts a mine on the first revealed cell, or otherwise does not match the
    /// config, makes that reveal fail with [`GameError::InvalidConfiguration`]. The board is left
    /// untouched and no move is counted.
    pub fn with_placer(config: GameConfig, placer: P) -> Self {
        Self {
            grid: GridState::new(config),
            placer,
            move_count: 0,
            outcome: Default::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.grid.config()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Reveals a cell, placing the mines first when this is the opening move.
    ///
    /// Revealing a cell that is already uncovered changes nothing and reports an empty batch.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_in_progress()?;

        if self.grid.is_uncovered(coords)? {
            log::trace!("Cell at {:?} already uncovered", coords);
            return Ok(RevealResult::unchanged(mines_around(&self.grid, coords)?));
        }

        if self.move_count == 0 {
            place_mines(&mut self.grid, &mut self.placer, coords)?;
            log::debug!("Session started at {:?}", coords);
        }

        self.grid.set_uncovered(coords)?;
        self.move_count += 1;

        if self.grid.is_mine(coords)? {
            self.outcome = Outcome::Lost;
            log::debug!(
                "Mine hit at {:?}, session lost after {} moves",
                coords,
                self.move_count
            );
            return Ok(RevealResult::exploded(self.grid.mine_coords()));
        }

        let count = mines_around(&self.grid, coords)?;
        let uncovered_batch = if count == 0 {
            flood(&mut self.grid, coords)?
        } else {
            vec![UncoveredCell::new(coords, count)]
        };

        let won = has_won(&self.grid);
        if won {
            self.outcome = Outcome::Won;
            log::debug!("Session won after {} moves", self.move_count);
        }

        Ok(RevealResult {
            mine_hit: false,
            mines_around: count,
            uncovered_batch,
            won,
            mine_locations: Vec::new(),
        })
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}
