//! Animation primitives: range mapping, easing and exponential damping.
//!
//! Everything here is pure arithmetic over already-validated inputs. The
//! section controllers compose these three pieces every frame: map global
//! scroll progress into a local 0..1 value ([`range::SectionRange`]), ease it
//! ([`easing::Easing`]), then pull the owned transform toward the resulting
//! target ([`damp::damp`]).

pub mod damp;
pub mod easing;
pub mod range;

pub use damp::{damp, damp_vec3};
pub use easing::{smoothstep, Easing};
pub use range::SectionRange;
