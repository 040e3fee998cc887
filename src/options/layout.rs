//! Procedural layout settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::LayoutSeed;

/// Counts, bounds and seeding for the procedurally generated scene content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct LayoutOptions {
    /// Number of buildings scattered across the city block.
    pub building_count: usize,
    /// Side length of the square the buildings scatter over.
    pub city_extent: f32,
    /// Number of particles in the shell around the planet.
    pub particle_count: usize,
    /// Inner radius of the particle shell.
    pub particle_radius: f32,
    /// Radial depth of the particle shell beyond the inner radius.
    pub particle_depth: f32,
    /// Seed policy; `Fixed` reproduces the same layout every session.
    pub seed: LayoutSeed,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            building_count: 120,
            city_extent: 45.0,
            particle_count: 200,
            particle_radius: 15.0,
            particle_depth: 10.0,
            seed: LayoutSeed::Entropy,
        }
    }
}
