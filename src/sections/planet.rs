//! Planet system section.
//!
//! Two independent motion sources are summed here: scroll drives the framing
//! of the whole planet group (lift, depth, yaw sweep), while wall-clock time
//! drives the moons' circular orbits and the slow drift of the particle
//! shell. Moon kinds and render parameters are fixed at generation time; the
//! per-frame orbit update is pure trigonometry.

use glam::Vec3;

use crate::animation::{damp, Easing, SectionRange};
use crate::error::RigError;
use crate::options::{LayoutOptions, PlanetOptions};
use crate::scene::{
    default_moons, scatter_particles, Moon, Particle, TransformArena, TransformId, TransformRecord,
};

use super::{FrameInput, SectionController};

struct PlanetIds {
    group: TransformId,
    moons: Vec<TransformId>,
    particles: TransformId,
}

/// Controller for the planet-and-moons section.
pub struct PlanetSection {
    framing: SectionRange,
    easing: Easing,
    moons: Vec<Moon>,
    particles: Vec<Particle>,

    rest_height: f32,
    lift: f32,
    depth: f32,
    yaw_sweep: f32,
    framing_rate: f32,
    moon_bob_amplitude: f32,
    moon_bob_height: f32,
    moon_spin: Vec3,
    particle_drift: f32,

    ids: Option<PlanetIds>,
}

impl PlanetSection {
    /// Build the section from options, generating the particle shell once.
    pub fn new(opts: &PlanetOptions, layout: &LayoutOptions) -> Result<Self, RigError> {
        let framing = SectionRange::new(opts.framing_start, opts.framing_length)?;

        let mut rng = layout.seed.rng();
        let particles = scatter_particles(
            layout.particle_count,
            layout.particle_radius,
            layout.particle_depth,
            &mut rng,
        );

        Ok(Self {
            framing,
            easing: Easing::DEFAULT,
            moons: default_moons(),
            particles,
            rest_height: opts.rest_height,
            lift: opts.lift,
            depth: opts.depth,
            yaw_sweep: opts.yaw_sweep,
            framing_rate: opts.framing_rate,
            moon_bob_amplitude: 0.1,
            moon_bob_height: 0.4,
            // Converted from the showcase's per-frame increments at 60 fps
            // to rates in radians per second.
            moon_spin: Vec3::new(0.6, 1.2, 0.0),
            particle_drift: 0.03,
            ids: None,
        })
    }

    /// The orbiting bodies (fixed arrangement).
    #[must_use]
    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    /// The generated particle shell (fixed for the session).
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Transform id of the group record, if mounted.
    #[must_use]
    pub fn group_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.group)
    }

    /// Transform id of one moon's record, if mounted.
    #[must_use]
    pub fn moon_id(&self, index: usize) -> Option<TransformId> {
        self.ids
            .as_ref()
            .and_then(|ids| ids.moons.get(index).copied())
    }

    /// Transform id of the particle shell's group record, if mounted.
    #[must_use]
    pub fn particles_id(&self) -> Option<TransformId> {
        self.ids.as_ref().map(|ids| ids.particles)
    }

    /// Parametric orbit position for one moon at a wall-clock time.
    #[must_use]
    pub fn orbit_position(&self, moon: &Moon, elapsed: f32) -> Vec3 {
        let theta = elapsed * moon.angular_speed;
        Vec3::new(
            theta.cos() * moon.distance,
            self.moon_bob_height + (theta * 2.0).sin() * self.moon_bob_amplitude,
            theta.sin() * moon.distance,
        )
    }
}

impl SectionController for PlanetSection {
    fn mount(&mut self, arena: &mut TransformArena) {
        let group = arena.insert(TransformRecord::at(Vec3::new(
            0.0,
            self.rest_height,
            self.depth,
        )));
        let moons = self
            .moons
            .iter()
            .map(|moon| {
                let mut rec = TransformRecord::at(self.orbit_position(moon, 0.0));
                rec.emissive_intensity = moon.kind.render_params().emissive_intensity;
                arena.insert(rec)
            })
            .collect();
        let particles = arena.allocate();
        self.ids = Some(PlanetIds {
            group,
            moons,
            particles,
        });
        log::debug!(
            "planet mounted with {} moons, {} particles",
            self.moons.len(),
            self.particles.len()
        );
    }

    fn update(&mut self, frame: &FrameInput, arena: &mut TransformArena) {
        let Some(ids) = &self.ids else { return };

        // Scroll-driven framing of the whole group.
        let t = self.framing.eased(frame.progress, self.easing);
        if let Some(rec) = arena.get_mut(ids.group) {
            let target = Vec3::new(0.0, self.rest_height + self.lift * t, self.depth);
            rec.position =
                crate::animation::damp_vec3(rec.position, target, self.framing_rate, frame.dt);
            rec.rotation.y = damp(
                rec.rotation.y,
                self.yaw_sweep * t,
                self.framing_rate,
                frame.dt,
            );
        }

        // Clock-driven orbits, written directly: the parametric position is
        // already continuous in time, damping it would lag the orbit.
        for (index, moon) in self.moons.iter().enumerate() {
            let Some(rec) = ids.moons.get(index).and_then(|id| arena.get_mut(*id)) else {
                continue;
            };
            rec.position = self.orbit_position(moon, frame.elapsed);
            rec.rotation.x = frame.elapsed * self.moon_spin.x;
            rec.rotation.y = frame.elapsed * self.moon_spin.y;
        }

        // Slow particle drift and opacity shimmer.
        if let Some(rec) = arena.get_mut(ids.particles) {
            rec.rotation.y = frame.elapsed * self.particle_drift;
            rec.opacity = 0.6 + 0.2 * frame.elapsed.sin();
        }
    }

    fn unmount(&mut self, arena: &mut TransformArena) {
        if let Some(ids) = self.ids.take() {
            let _group = arena.remove(ids.group);
            let _particles = arena.remove(ids.particles);
            for id in ids.moons {
                let _moon = arena.remove(id);
            }
        }
    }

    fn name(&self) -> &'static str {
        "planet"
    }
}
