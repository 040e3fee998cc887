//! Hover vehicle section.
//!
//! Scrolling through the section carries the vehicle group through a single
//! up-then-down sine arc (one period over the active range, so it lands back
//! at its baseline) while sweeping its yaw. On top of that, wall-clock time
//! drives a small idle bob of the car body and the pulsing emissive of the
//! hover pad beneath it — the same two-source sum the planet section uses.

use std::f32::consts::PI;

use glam::Vec3;

use crate::animation::{damp, Easing, SectionRange};
use crate::error::RigError;
use crate::options::VehicleOptions;
use crate::scene::{TransformArena, TransformId, TransformRecord};

use super::{FrameInput, SectionController};

struct VehicleIds {
    group: TransformId,
    car: TransformId,
    pad: TransformId,
}

/// Controller for the hover vehicle section.
pub struct VehicleSection {
    range: SectionRange,
    easing: Easing,

    baseline: f32,
    bob_amplitude: f32,
    yaw_sweep: f32,
    rate: f32,

    idle_height: f32,
    idle_amplitude: f32,
    idle_speed: f32,
    idle_spin: f32,
    pad_pulse_speed: f32,

    ids: Option<VehicleIds>,
}

impl VehicleSection {
    /// Build the section from options; the active range is validated here.
    pub fn new(opts: &VehicleOptions) -> Result<Self, RigError> {
        let range = SectionRange::new(opts.start, opts.length)?;
        Ok(Self {
            range,
            easing: Easing::DEFAULT,
            baseline: opts.baseline,
            bob_amplitude: opts.bob_amplitude,
            yaw_sweep: opts.yaw_sweep,
            rate: opts.rate,
            idle_height: 0.5,
            idle_amplitude: 0.15,
            idle_speed: 2.5,
            // Converted from the showcase's per-frame yaw increment at
            // 60 fps to radians per second.
            idle_spin: 0.6,
            pad_pulse_speed: 3.0,
            ids: None,
        })
    }

    /// Transform id of the group record, if mounted.
    #[must_use]
    pub fn group_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.group)
    }

    /// Transform id of the car body record, if mounted.
    #[must_use]
    pub fn car_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.car)
    }

    /// Transform id of the hover pad record, if mounted.
    #[must_use]
    pub fn pad_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.pad)
    }

    /// Scroll-driven height target: one sine period over the active range,
    /// returning to the baseline at both ends.
    #[must_use]
    pub fn bob_target(&self, progress: f32) -> f32 {
        let eased = self.range.eased(progress, self.easing);
        self.baseline + (eased * PI).sin() * self.bob_amplitude
    }
}

impl SectionController for VehicleSection {
    fn mount(&mut self, arena: &mut TransformArena) {
        let group = arena.insert(TransformRecord::at(Vec3::new(0.0, self.baseline, 2.0)));
        let car = arena.insert(TransformRecord::at(Vec3::new(0.0, self.idle_height, 0.0)));
        let pad = arena.insert(TransformRecord {
            emissive_intensity: 0.4,
            ..TransformRecord::default()
        });
        self.ids = Some(VehicleIds { group, car, pad });
        log::debug!("vehicle mounted");
    }

    fn update(&mut self, frame: &FrameInput, arena: &mut TransformArena) {
        let Some(ids) = &self.ids else { return };

        let eased = self.range.eased(frame.progress, self.easing);
        if let Some(rec) = arena.get_mut(ids.group) {
            rec.position.y = damp(
                rec.position.y,
                self.bob_target(frame.progress),
                self.rate,
                frame.dt,
            );
            rec.rotation.y = damp(
                rec.rotation.y,
                eased * self.yaw_sweep,
                self.rate,
                frame.dt,
            );
        }

        // Clock-driven idle motion, independent of scroll.
        if let Some(rec) = arena.get_mut(ids.car) {
            rec.position.y =
                self.idle_height + (frame.elapsed * self.idle_speed).sin() * self.idle_amplitude;
            rec.rotation.y = frame.elapsed * self.idle_spin;
        }
        if let Some(rec) = arena.get_mut(ids.pad) {
            rec.emissive_intensity = 0.4 + (frame.elapsed * self.pad_pulse_speed).sin() * 0.3;
        }
    }

    fn unmount(&mut self, arena: &mut TransformArena) {
        if let Some(ids) = self.ids.take() {
            let _group = arena.remove(ids.group);
            let _car = arena.remove(ids.car);
            let _pad = arena.remove(ids.pad);
        }
    }

    fn name(&self) -> &'static str {
        "vehicle"
    }
}
