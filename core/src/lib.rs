#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use error::*;
pub use grid::*;
pub use outcome::*;
pub use placer::*;
pub use presets::*;
pub use provider::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod adjacency;
mod error;
mod grid;
mod outcome;
mod placer;
mod presets;
mod provider;
mod reveal;
mod session;
mod types;

/// Validated board parameters: a square board of side `size` hiding `mines` mines.
///
/// Deserializing goes through the same checks as [`GameConfig::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl GameConfig {
    /// Fails with [`GameError::InvalidConfiguration`] unless `size >= 1` and `mines < size * size`.
    pub const fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines >= square(size) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn config_requires_a_safe_cell() {
        assert_eq!(GameConfig::new(3, 9), Err(GameError::InvalidConfiguration));
        assert_eq!(GameConfig::new(1, 1), Err(GameError::InvalidConfiguration));

        let config = GameConfig::new(3, 8).unwrap();
        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn config_accepts_mine_free_board() {
        let config = GameConfig::new(1, 0).unwrap();
        assert_eq!(config.total_cells(), 1);
    }

    #[test]
    fn deserialized_config_is_validated() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 16, "mines": 40}"#).unwrap();
        assert_eq!(config, GameConfig::new(16, 40).unwrap());
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"size":16,"mines":40}"#);

        assert!(serde_json::from_str::<GameConfig>(r#"{"size": 3, "mines": 9}"#).is_err());
        assert!(serde_json::from_str::<GameConfig>(r#"{"size": 0, "mines": 0}"#).is_err());
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let config = GameConfig::new(4, 2).unwrap();
        assert_eq!(config.validate_coords((3, 3)), Ok((3, 3)));
        assert_eq!(config.validate_coords((4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(config.validate_coords((0, 4)), Err(GameError::OutOfBounds));
    }
}
