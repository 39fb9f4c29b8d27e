use minefield_core::Presets;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings of a front end: who it plays as and which difficulty levels it offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub userid: String,
    pub presets: Presets,
}

impl ClientConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            userid: "ensuit00".to_string(),
            presets: Presets::default(),
        }
    }
}
