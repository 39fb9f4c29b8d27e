use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A named difficulty level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub size: Coord,
    pub mines: CellCount,
}

impl Preset {
    pub fn new(name: impl Into<String>, size: Coord, mines: CellCount) -> Self {
        Self {
            name: name.into(),
            size,
            mines,
        }
    }

    pub fn config(&self) -> Result<GameConfig> {
        GameConfig::new(self.size, self.mines)
    }
}

/// Difficulty table owned by the caller, the engine itself only sees [`GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Presets(Vec<Preset>);

impl Presets {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self(presets)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.0.iter().find(|preset| preset.name == name)
    }

    /// Unknown names and entries that do not make a valid board are both configuration errors.
    pub fn config(&self, name: &str) -> Result<GameConfig> {
        self.get(name)
            .ok_or(GameError::InvalidConfiguration)?
            .config()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.0.iter()
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self(vec![
            Preset::new("small", 9, 10),
            Preset::new("medium", 16, 40),
            Preset::new("large", 24, 150),
        ])
    }
}
