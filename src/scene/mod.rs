//! Scene-side data: transform records, procedural entities and layout.
//!
//! The animator never holds references into the host's retained scene graph.
//! Controllers write into a [`TransformArena`] of plain records; the host
//! renderer reads those records each frame and poses its own nodes.

pub mod entity;
pub mod layout;
pub mod transform;

pub use entity::{Building, BuildingStyle, Moon, MoonKind, MoonRenderParams, Particle};
pub use layout::{default_moons, scatter_buildings, scatter_particles, LayoutSeed};
pub use transform::{TransformArena, TransformId, TransformRecord};
