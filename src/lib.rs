// -- Lint policy ---------------------------------------------------------
// Crate-wide lint levels live in Cargo.toml ([workspace.lints]). The rules
// below are the non-negotiables restated for readers of this file.

// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

//! Scroll-driven scene animation rig.
//!
//! Scrollrig maps a normalized scroll progress value (0 at the top of a
//! virtual multi-page experience, 1 at the bottom) onto eased, time-damped
//! transform targets for a set of independently animated scene sections:
//! a growing skyline, a planet with clock-driven moon orbits, and a hovering
//! vehicle. It is a control loop, not a renderer — each frame it writes
//! position/rotation/emissive values into a [`scene::TransformArena`] that a
//! host 3D engine reads when posing its own scene graph.
//!
//! # Key entry points
//!
//! - [`rig::ShowcaseRig`] - owns the sections and drives the per-frame update
//! - [`progress::ScrollTrack`] - damped multi-page scroll progress source
//! - [`options::Options`] - runtime configuration (ranges, damping, layout)
//! - [`animation`] - range mapping, easing and exponential damping primitives
//!
//! # Frame contract
//!
//! The host calls [`rig::ShowcaseRig::advance`] once per display refresh with
//! the elapsed frame time. Sections update in mount order; each touches only
//! its own transform records, so ordering has no observable effect. A section
//! whose records have been unmounted skips its update for the frame and
//! naturally resumes if remounted.

pub mod animation;
pub mod error;
pub mod options;
pub mod progress;
pub mod rig;
pub mod scene;
pub mod sections;
pub mod util;

pub use error::RigError;
pub use rig::ShowcaseRig;
