//! Per-section animation settings.
//!
//! Ranges are expressed as `(start, length)` fractions of the whole scroll
//! track. Damping rates are per-second exponential follow rates.

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Skyline section: group framing plus staggered building reveal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SkylineOptions {
    /// Start of the group framing window.
    pub framing_start: f32,
    /// Length of the group framing window.
    pub framing_length: f32,
    /// Start of the base building reveal window.
    pub reveal_start: f32,
    /// Length of each building's reveal window.
    pub reveal_length: f32,
    /// Stagger repeats after this many buildings.
    pub stagger_stride: usize,
    /// Window offset between consecutive stagger classes, in track fraction.
    pub stagger_step: f32,
    /// Resting depth of the city group.
    pub depth_base: f32,
    /// Additional depth pulled in over the framing window.
    pub depth_pull: f32,
    /// Total yaw swept over the framing window, radians.
    pub yaw_sweep: f32,
    /// Follow rate for group depth and yaw.
    pub framing_rate: f32,
    /// Follow rate for per-building rise.
    pub reveal_rate: f32,
    /// Emissive intensity of an unrevealed building.
    pub emissive_floor: f32,
    /// Emissive intensity added at full reveal.
    pub emissive_gain: f32,
}

impl Default for SkylineOptions {
    fn default() -> Self {
        Self {
            framing_start: 0.18,
            framing_length: 0.18,
            reveal_start: 0.2,
            reveal_length: 0.16,
            stagger_stride: 15,
            stagger_step: 0.002,
            depth_base: -8.0,
            depth_pull: -8.0,
            yaw_sweep: 1.2,
            framing_rate: 3.0,
            reveal_rate: 6.0,
            emissive_floor: 0.2,
            emissive_gain: 0.8,
        }
    }
}

/// Planet section: group framing over its scroll window. Orbit parameters
/// live on the moons themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct PlanetOptions {
    /// Start of the framing window.
    pub framing_start: f32,
    /// Length of the framing window.
    pub framing_length: f32,
    /// Height of the planet group at rest.
    pub rest_height: f32,
    /// Additional height gained over the framing window.
    pub lift: f32,
    /// Depth of the planet group.
    pub depth: f32,
    /// Total yaw swept over the framing window, radians.
    pub yaw_sweep: f32,
    /// Follow rate for the group framing.
    pub framing_rate: f32,
}

impl Default for PlanetOptions {
    fn default() -> Self {
        Self {
            framing_start: 0.36,
            framing_length: 0.18,
            rest_height: 1.5,
            lift: 0.8,
            depth: -3.0,
            yaw_sweep: 2.5 * PI,
            framing_rate: 3.0,
        }
    }
}

/// Vehicle section: one sine bob arc and a yaw sweep over its window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct VehicleOptions {
    /// Start of the active window.
    pub start: f32,
    /// Length of the active window.
    pub length: f32,
    /// Hover height at both ends of the arc.
    pub baseline: f32,
    /// Peak height gained at the middle of the arc.
    pub bob_amplitude: f32,
    /// Total yaw swept over the window, radians.
    pub yaw_sweep: f32,
    /// Follow rate for height and yaw.
    pub rate: f32,
}

impl Default for VehicleOptions {
    fn default() -> Self {
        Self {
            start: 0.54,
            length: 0.2,
            baseline: 0.8,
            bob_amplitude: 0.6,
            yaw_sweep: 2.5 * PI,
            rate: 4.0,
        }
    }
}
