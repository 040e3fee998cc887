//! Procedural scene entities.
//!
//! Entities are generated once when a section mounts and never mutated
//! afterward; only the rendered transform derived from scroll progress
//! changes. Material-facing parameters are resolved at generation time so no
//! per-frame dispatch on entity kind remains.

use glam::{Vec2, Vec3};

/// Material preset for one of the building styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingStyle {
    /// Base body color (linear RGB).
    pub base_color: [f32; 3],
    /// Window emissive color (linear RGB).
    pub emissive_color: [f32; 3],
    /// Material metalness.
    pub metalness: f32,
    /// Material roughness.
    pub roughness: f32,
}

/// The three building material styles cycled through by the scatter
/// generator.
pub const BUILDING_STYLES: [BuildingStyle; 3] = [
    BuildingStyle {
        base_color: [0.102, 0.102, 0.102],
        emissive_color: [0.545, 0.361, 0.965],
        metalness: 0.8,
        roughness: 0.2,
    },
    BuildingStyle {
        base_color: [0.165, 0.165, 0.165],
        emissive_color: [0.659, 0.333, 0.969],
        metalness: 0.7,
        roughness: 0.3,
    },
    BuildingStyle {
        base_color: [0.039, 0.039, 0.039],
        emissive_color: [0.753, 0.518, 0.988],
        metalness: 0.9,
        roughness: 0.1,
    },
];

/// One procedurally placed building. Immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    /// Ground-plane placement (x, z).
    pub footprint: Vec2,
    /// Full building height; the reveal animates the rendered box from the
    /// ground up to `height / 2` center offset.
    pub height: f32,
    /// Index into [`BUILDING_STYLES`].
    pub style: usize,
}

impl Building {
    /// Resolved material style.
    #[must_use]
    pub fn style(&self) -> BuildingStyle {
        BUILDING_STYLES[self.style % BUILDING_STYLES.len()]
    }
}

/// One decorative particle in the space shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Fixed world-space position.
    pub position: Vec3,
}

/// Kind of orbiting body around the planet.
///
/// Resolved once at generation time into [`MoonRenderParams`]; the per-frame
/// orbit update never branches on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonKind {
    /// Angular space station with a ring.
    Station,
    /// Plain rocky moon.
    Moon,
    /// Translucent crystal shard.
    Crystal,
}

/// Render-facing parameters derived from a moon's kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonRenderParams {
    /// Emissive intensity for the body material.
    pub emissive_intensity: f32,
    /// Material metalness.
    pub metalness: f32,
    /// Material roughness.
    pub roughness: f32,
    /// Whether the host should add an orbiting ring mesh.
    pub has_ring: bool,
    /// Whether the body uses a transmissive (glass-like) material.
    pub transmissive: bool,
}

impl MoonKind {
    /// Resolve kind-specific rendering parameters.
    #[must_use]
    pub fn render_params(self) -> MoonRenderParams {
        match self {
            MoonKind::Station => MoonRenderParams {
                emissive_intensity: 0.6,
                metalness: 0.9,
                roughness: 0.1,
                has_ring: true,
                transmissive: false,
            },
            MoonKind::Moon => MoonRenderParams {
                emissive_intensity: 0.4,
                metalness: 0.8,
                roughness: 0.2,
                has_ring: false,
                transmissive: false,
            },
            MoonKind::Crystal => MoonRenderParams {
                emissive_intensity: 0.3,
                metalness: 0.1,
                roughness: 0.05,
                has_ring: false,
                transmissive: true,
            },
        }
    }
}

/// One orbiting body. Orbit geometry is fixed at generation; only the
/// parametric angle advances with wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    /// Orbit radius around the planet center.
    pub distance: f32,
    /// Body radius.
    pub size: f32,
    /// Orbit angular speed in radians per second.
    pub angular_speed: f32,
    /// Body color (linear RGB).
    pub color: [f32; 3],
    /// Body kind, with render params resolved via
    /// [`MoonKind::render_params`].
    pub kind: MoonKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_style_wraps_out_of_range_indices() {
        let b = Building {
            footprint: Vec2::ZERO,
            height: 4.0,
            style: 7,
        };
        assert_eq!(b.style(), BUILDING_STYLES[7 % 3]);
    }

    #[test]
    fn moon_kinds_resolve_distinct_params() {
        let station = MoonKind::Station.render_params();
        let moon = MoonKind::Moon.render_params();
        let crystal = MoonKind::Crystal.render_params();

        assert!(station.has_ring);
        assert!(!moon.has_ring);
        assert!(crystal.transmissive);
        assert!(!station.transmissive);
        assert!(moon.metalness > crystal.metalness);
    }
}
