//! One-shot procedural layout generators.
//!
//! Generators run exactly once when a section mounts; regenerating per frame
//! would repopulate the scene and pop visually. Seeding is an explicit
//! configuration choice: `Entropy` gives a fresh layout per session,
//! `Fixed(n)` reproduces the same layout across reloads and in tests.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::entity::{Building, Moon, MoonKind, Particle, BUILDING_STYLES};

/// Seed selection for procedural layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSeed {
    /// Fresh OS entropy each session (non-reproducible layouts).
    #[default]
    Entropy,
    /// Fixed seed for reproducible layouts.
    Fixed(u64),
}

impl LayoutSeed {
    /// Build the generator RNG for this seed choice.
    #[must_use]
    pub fn rng(self) -> StdRng {
        match self {
            LayoutSeed::Entropy => StdRng::from_os_rng(),
            LayoutSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Scatter `count` buildings uniformly over a square city footprint.
///
/// `extent` is the full side length of the square; positions land in
/// `±extent/2` on both ground axes. Heights span 0.8..8.8 and styles cycle
/// randomly through the three presets.
pub fn scatter_buildings(count: usize, extent: f32, rng: &mut StdRng) -> Vec<Building> {
    let extent = extent.abs();
    (0..count)
        .map(|_| Building {
            footprint: Vec2::new(
                (rng.random::<f32>() - 0.5) * extent,
                (rng.random::<f32>() - 0.5) * extent,
            ),
            height: 0.8 + rng.random::<f32>() * 8.0,
            style: rng.random_range(0..BUILDING_STYLES.len()),
        })
        .collect()
}

/// Scatter `count` particles in a spherical shell around the origin.
///
/// Radii are uniform in `inner_radius..inner_radius + shell_depth`, angles
/// uniform over the sphere parameterization used by the showcase background.
pub fn scatter_particles(
    count: usize,
    inner_radius: f32,
    shell_depth: f32,
    rng: &mut StdRng,
) -> Vec<Particle> {
    use std::f32::consts::TAU;
    (0..count)
        .map(|_| {
            let radius = inner_radius + rng.random::<f32>() * shell_depth;
            let theta = rng.random::<f32>() * TAU;
            let phi = rng.random::<f32>() * TAU;
            Particle {
                position: Vec3::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                ),
            }
        })
        .collect()
}

/// The stock moon arrangement: three bodies of distinct kinds on widening
/// orbits, slowest on the outside.
#[must_use]
pub fn default_moons() -> Vec<Moon> {
    vec![
        Moon {
            distance: 3.2,
            size: 0.32,
            angular_speed: 0.7,
            color: [0.545, 0.361, 0.965],
            kind: MoonKind::Station,
        },
        Moon {
            distance: 4.1,
            size: 0.25,
            angular_speed: 1.1,
            color: [0.659, 0.333, 0.969],
            kind: MoonKind::Moon,
        },
        Moon {
            distance: 5.2,
            size: 0.18,
            angular_speed: 0.5,
            color: [0.753, 0.518, 0.988],
            kind: MoonKind::Crystal,
        },
    ]
}
