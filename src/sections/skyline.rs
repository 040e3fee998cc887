//! Skyline growth section.
//!
//! A procedurally scattered city block whose buildings rise out of the
//! ground as the user scrolls through the section. Each building gets its
//! own reveal window, offset by `(index mod stride) × step` from the base
//! window so the skyline rises as a deterministic ripple rather than all at
//! once. The group itself is pulled deeper and swept around while the
//! section is active.

use glam::Vec3;

use crate::animation::{damp, Easing, SectionRange};
use crate::error::RigError;
use crate::options::{LayoutOptions, SkylineOptions};
use crate::scene::{scatter_buildings, Building, TransformArena, TransformId, TransformRecord};

use super::{FrameInput, SectionController};

struct SkylineIds {
    group: TransformId,
    buildings: Vec<TransformId>,
}

/// Controller for the skyline growth section.
pub struct SkylineSection {
    framing: SectionRange,
    windows: Vec<SectionRange>,
    buildings: Vec<Building>,
    easing: Easing,

    depth_base: f32,
    depth_pull: f32,
    yaw_sweep: f32,
    framing_rate: f32,
    reveal_rate: f32,
    emissive_floor: f32,
    emissive_gain: f32,

    ids: Option<SkylineIds>,
}

impl SkylineSection {
    /// Build the section from options, generating the building layout once.
    ///
    /// All ranges (the framing window, the base reveal window, and every
    /// staggered per-building window) are validated here; a stagger
    /// configuration that pushes a window past the end of the track is
    /// rejected as a configuration defect.
    pub fn new(opts: &SkylineOptions, layout: &LayoutOptions) -> Result<Self, RigError> {
        let framing = SectionRange::new(opts.framing_start, opts.framing_length)?;
        let reveal = SectionRange::new(opts.reveal_start, opts.reveal_length)?;

        let mut rng = layout.seed.rng();
        let buildings = scatter_buildings(layout.building_count, layout.city_extent, &mut rng);

        let stride = opts.stagger_stride.max(1);
        let mut windows = Vec::with_capacity(buildings.len());
        for index in 0..buildings.len() {
            let offset = (index % stride) as f32 * opts.stagger_step;
            windows.push(reveal.shifted(offset)?);
        }

        Ok(Self {
            framing,
            windows,
            buildings,
            easing: Easing::DEFAULT,
            depth_base: opts.depth_base,
            depth_pull: opts.depth_pull,
            yaw_sweep: opts.yaw_sweep,
            framing_rate: opts.framing_rate,
            reveal_rate: opts.reveal_rate,
            emissive_floor: opts.emissive_floor,
            emissive_gain: opts.emissive_gain,
            ids: None,
        })
    }

    /// The generated building layout (fixed for the session).
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// The staggered reveal window for one building.
    #[must_use]
    pub fn reveal_window(&self, index: usize) -> Option<SectionRange> {
        self.windows.get(index).copied()
    }

    /// Eased reveal progress for one building at a global progress value.
    #[must_use]
    pub fn reveal_progress(&self, index: usize, progress: f32) -> f32 {
        self.windows
            .get(index)
            .map_or(0.0, |w| w.eased(progress, self.easing))
    }

    /// Transform id of the group record, if mounted.
    #[must_use]
    pub fn group_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.group)
    }

    /// Transform id of one building's record, if mounted.
    #[must_use]
    pub fn building_id(&self, index: usize) -> Option<TransformId> {
        self.ids
            .as_ref()
            .and_then(|ids| ids.buildings.get(index).copied())
    }
}

impl SectionController for SkylineSection {
    fn mount(&mut self, arena: &mut TransformArena) {
        let group = arena.insert(TransformRecord::at(Vec3::new(0.0, 0.0, self.depth_base)));
        let buildings = self
            .buildings
            .iter()
            .map(|b| {
                let mut rec =
                    TransformRecord::at(Vec3::new(b.footprint.x, 0.0, b.footprint.y));
                rec.emissive_intensity = self.emissive_floor;
                arena.insert(rec)
            })
            .collect();
        self.ids = Some(SkylineIds { group, buildings });
        log::debug!("skyline mounted with {} buildings", self.buildings.len());
    }

    fn update(&mut self, frame: &FrameInput, arena: &mut TransformArena) {
        let Some(ids) = &self.ids else { return };

        let t = self.framing.eased(frame.progress, self.easing);
        if let Some(rec) = arena.get_mut(ids.group) {
            rec.position.z = damp(
                rec.position.z,
                self.depth_base + self.depth_pull * t,
                self.framing_rate,
                frame.dt,
            );
            rec.rotation.y = damp(
                rec.rotation.y,
                self.yaw_sweep * t,
                self.framing_rate,
                frame.dt,
            );
        }

        for (index, building) in self.buildings.iter().enumerate() {
            let Some(rec) = ids.buildings.get(index).and_then(|id| arena.get_mut(*id))
            else {
                continue;
            };
            let eased = self.windows[index].eased(frame.progress, self.easing);
            rec.position.y = damp(
                rec.position.y,
                eased * building.height / 2.0,
                self.reveal_rate,
                frame.dt,
            );
            rec.emissive_intensity = self.emissive_floor + self.emissive_gain * eased;
        }
    }

    fn unmount(&mut self, arena: &mut TransformArena) {
        if let Some(ids) = self.ids.take() {
            let _group = arena.remove(ids.group);
            for id in ids.buildings {
                let _building = arena.remove(id);
            }
        }
    }

    fn name(&self) -> &'static str {
        "skyline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LayoutOptions, SkylineOptions};
    use crate::scene::LayoutSeed;

    const DT: f32 = 1.0 / 60.0;

    fn small_layout() -> LayoutOptions {
        LayoutOptions {
            building_count: 40,
            seed: LayoutSeed::Fixed(11),
            ..LayoutOptions::default()
        }
    }

    fn section() -> SkylineSection {
        SkylineSection::new(&SkylineOptions::default(), &small_layout()).unwrap()
    }

    fn settle(section: &mut SkylineSection, arena: &mut TransformArena, progress: f32) {
        let mut elapsed = 0.0;
        for _ in 0..600 {
            elapsed += DT;
            section.update(
                &FrameInput {
                    progress,
                    dt: DT,
                    elapsed,
                },
                arena,
            );
        }
    }

    /// Half-reveal progress value for one building, found by scanning.
    fn half_reveal_point(section: &SkylineSection, index: usize) -> f32 {
        let mut p = 0.0;
        while section.reveal_progress(index, p) < 0.5 {
            p += 1e-4;
            assert!(p <= 1.0, "building {index} never reached half reveal");
        }
        p
    }

    #[test]
    fn stagger_gives_same_window_to_same_offset_class() {
        let section = section();
        let stride = 15;
        let a = half_reveal_point(&section, 0);
        let b = half_reveal_point(&section, stride);
        assert!(
            (a - b).abs() < 2e-4,
            "buildings i and i+stride must reveal together: {a} vs {b}"
        );
    }

    #[test]
    fn stagger_orders_distinct_offset_classes() {
        let section = section();
        let p0 = half_reveal_point(&section, 0);
        let p1 = half_reveal_point(&section, 1);
        let p2 = half_reveal_point(&section, 2);
        assert!(p0 < p1 && p1 < p2, "reveal ripple must follow offset order");
    }

    #[test]
    fn at_rest_before_section_starts() {
        let mut section = section();
        let mut arena = TransformArena::new();
        section.mount(&mut arena);
        settle(&mut section, &mut arena, 0.0);

        for index in 0..section.buildings().len() {
            let id = section.building_id(index).unwrap();
            let rec = arena.get(id).unwrap();
            assert!(rec.position.y.abs() < 1e-3, "building must rest at height 0");
            assert!((rec.emissive_intensity - 0.2).abs() < 1e-5);
        }
        let group = arena.get(section.group_id().unwrap()).unwrap();
        assert!((group.position.z + 8.0).abs() < 1e-3);
        assert!(group.rotation.y.abs() < 1e-3);
    }

    #[test]
    fn fully_revealed_at_end_of_track() {
        let mut section = section();
        let mut arena = TransformArena::new();
        section.mount(&mut arena);
        settle(&mut section, &mut arena, 1.0);

        for (index, building) in section.buildings().iter().enumerate() {
            let id = section.building_id(index).unwrap();
            let rec = arena.get(id).unwrap();
            let expect = building.height / 2.0;
            assert!(
                (rec.position.y - expect).abs() < 1e-2,
                "building {index} should reach {expect}, got {}",
                rec.position.y
            );
            assert!((rec.emissive_intensity - 1.0).abs() < 1e-5);
        }
        let group = arena.get(section.group_id().unwrap()).unwrap();
        assert!((group.position.z + 16.0).abs() < 1e-2);
        assert!((group.rotation.y - 1.2).abs() < 1e-2);
    }

    #[test]
    fn update_skips_unmounted_records() {
        let mut section = section();
        let mut arena = TransformArena::new();
        section.mount(&mut arena);

        // Host tore down one building's node mid-session.
        let victim = section.building_id(3).unwrap();
        let _removed = arena.remove(victim);

        // Must not panic, and other records still update.
        settle(&mut section, &mut arena, 1.0);
        let survivor = section.building_id(4).unwrap();
        assert!(arena.get(survivor).unwrap().position.y > 0.0);
    }

    #[test]
    fn unmount_removes_all_records() {
        let mut section = section();
        let mut arena = TransformArena::new();
        section.mount(&mut arena);
        assert_eq!(arena.len(), 41); // group + 40 buildings

        section.unmount(&mut arena);
        assert!(arena.is_empty());

        // Updating after unmount is a no-op, not an error.
        section.update(
            &FrameInput {
                progress: 0.5,
                dt: DT,
                elapsed: 1.0,
            },
            &mut arena,
        );
    }

    #[test]
    fn oversized_stagger_is_a_construction_error() {
        let opts = SkylineOptions {
            reveal_start: 0.9,
            reveal_length: 0.09,
            stagger_step: 0.01,
            ..SkylineOptions::default()
        };
        assert!(SkylineSection::new(&opts, &small_layout()).is_err());
    }
}
