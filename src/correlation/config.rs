//! Tunable thresholds for the change correlator.
//!
//! These values were calibrated against real camera footage rather than
//! derived from the rules, so they are exposed as configuration. Every field
//! has a default; a TOML file only needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::correlation::touched_square::Orientation;
use crate::errors::TrackerError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorrelatorConfig {
    /// Clusters of at least this many squares must touch a back rank.
    pub noise_cluster_size: usize,
    /// Anything above this many squares is discarded outright.
    pub max_touched_squares: usize,
    /// Cluster size that triggers the en-passant/parallax disambiguation.
    pub parallax_cluster_size: usize,
    pub resolve_parallax: bool,
    pub orientation: Orientation,
}

impl Default for CorrelatorConfig {
    fn default() -> Self {
        Self {
            noise_cluster_size: 4,
            max_touched_squares: 6,
            parallax_cluster_size: 3,
            resolve_parallax: true,
            orientation: Orientation::LightNear,
        }
    }
}

impl CorrelatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TrackerError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let text = fs::read_to_string(path).map_err(|source| TrackerError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
