//! Per-section animation controllers.
//!
//! Each visual region of the showcase (skyline, planet system, hover
//! vehicle) has one controller. Every frame the rig hands each controller a
//! read-only [`FrameInput`]; the controller remaps global progress into its
//! own range, computes target transforms, and damps its arena records toward
//! them. Controllers run in mount order but share no mutable state, so the
//! order is not observable.

pub mod planet;
pub mod skyline;
pub mod vehicle;

pub use planet::PlanetSection;
pub use skyline::SkylineSection;
pub use vehicle::VehicleSection;

use crate::scene::TransformArena;

/// Per-frame input computed once by the rig and shared read-only by every
/// controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Global scroll progress in [0, 1].
    pub progress: f32,
    /// Elapsed frame time in seconds.
    pub dt: f32,
    /// Wall-clock seconds since the rig started, for clock-driven motion
    /// (moon orbits, idle bobs) that runs independently of scroll.
    pub elapsed: f32,
}

/// A per-visual-region update routine translating local progress into damped
/// transform targets.
pub trait SectionController {
    /// Allocate this section's transform records. Called once when the
    /// section joins the rig; calling it again remounts fresh records.
    fn mount(&mut self, arena: &mut TransformArena);

    /// Per-frame update. Must silently skip any record that is no longer
    /// mounted (the lookup misses) and never panic.
    fn update(&mut self, frame: &FrameInput, arena: &mut TransformArena);

    /// Remove this section's records. Updates become no-ops afterward.
    fn unmount(&mut self, arena: &mut TransformArena);

    /// Name for logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}
