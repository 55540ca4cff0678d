use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynamics::state::SimConfig;
use crate::error::Result;
use crate::sim::RunConfig;

/// Everything an orchestrator needs to launch runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
