//! Virtual scroll track settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scroll track length and feel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct TrackOptions {
    /// Number of virtual pages the track spans.
    pub pages: u32,
    /// Exponential follow rate of the smoothed offset, per second. Higher
    /// values track raw input more tightly.
    pub follow_rate: f32,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            pages: 6,
            follow_rate: 6.0,
        }
    }
}
