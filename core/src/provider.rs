use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// The set of operations a front end needs, whether the game runs in-process or elsewhere.
///
/// A front end picks one provider up front and keeps it for the whole session.
pub trait GameLogic {
    type Error: From<GameError>;

    /// Discards any previous game and starts a new one.
    fn init(&mut self, config: GameConfig) -> core::result::Result<(), Self::Error>;

    fn sweep(&mut self, coords: Coord2) -> core::result::Result<RevealResult, Self::Error>;
}

/// Runs the engine in-process.
#[derive(Clone, Debug)]
pub struct LocalLogic {
    rng: SmallRng,
    session: Option<GameSession>,
}

impl LocalLogic {
    /// Each new session draws its placement seed from a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }
}

impl GameLogic for LocalLogic {
    type Error = GameError;

    fn init(&mut self, config: GameConfig) -> Result<()> {
        let seed = self.rng.random();
        log::debug!(
            "New local session {}x{} with {} mines",
            config.size(),
            config.size(),
            config.mines()
        );
        self.session = Some(GameSession::new(config, seed));
        Ok(())
    }

    fn sweep(&mut self, coords: Coord2) -> Result<RevealResult> {
        self.session
            .as_mut()
            .ok_or(GameError::NoSession)?
            .reveal(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_before_init_fails() {
        let mut logic = LocalLogic::new(0);

        assert_eq!(logic.sweep((0, 0)), Err(GameError::NoSession));
    }

    #[test]
    fn init_replaces_the_previous_session() {
        let mut logic = LocalLogic::new(11);
        logic.init(GameConfig::new(3, 8).unwrap()).unwrap();
        logic.sweep((0, 0)).unwrap();
        assert_eq!(logic.sweep((1, 1)), Err(GameError::GameAlreadyOver));

        logic.init(GameConfig::new(5, 3).unwrap()).unwrap();

        let session = logic.session().unwrap();
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.config().size(), 5);
        assert!(logic.sweep((4, 4)).is_ok());
    }

    #[test]
    fn same_seed_plays_the_same_game() {
        let config = GameConfig::new(16, 40).unwrap();
        let mut first = LocalLogic::new(77);
        let mut second = LocalLogic::new(77);
        first.init(config).unwrap();
        second.init(config).unwrap();

        assert_eq!(first.sweep((8, 8)), second.sweep((8, 8)));
        assert_eq!(
            first.session().unwrap().grid().mine_coords(),
            second.session().unwrap().grid().mine_coords()
        );
    }
}
