//! Router configuration
//!
//! Loaded once from the host (JSON string or JS object) and kept for the
//! lifetime of the module. Every field has a default so partial configs work.

use serde::{Deserialize, Serialize};

use crate::edit::nudge::{NudgeSteps, Raster};
use crate::error::InputError;
use crate::models::Platform;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterConfig {
    /// Decides which modifier is the text accelerator
    pub platform: Platform,
    /// Nudge step table for non-beam elements, in spatium units
    pub nudge: NudgeSteps,
    /// Snapping grid, divisions per spatium
    pub raster: Raster,
    /// Log every key press at debug level
    pub debug_keys: bool,
}

impl RouterConfig {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::InvalidConfig(e.to_string()))
    }
}
