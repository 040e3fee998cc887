//! Section ranges: sub-intervals of global scroll progress.
//!
//! Each animated section is active over a `(start, length)` slice of the
//! global 0..1 progress. [`SectionRange::local`] remaps global progress into
//! the section's own 0..1 value, pinned to 0 before the range and 1 after it.

use crate::animation::easing::Easing;
use crate::error::RigError;

/// Lengths below this are treated as an instantaneous step rather than a
/// scale factor, guarding the division in [`SectionRange::local`].
pub const MIN_LENGTH: f32 = 1e-6;

/// A validated `(start, length)` sub-interval of global progress.
///
/// Invariants (enforced by [`SectionRange::new`]):
/// `0 <= start`, `length > 0`, `start + length <= 1`, all finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRange {
    start: f32,
    length: f32,
}

impl SectionRange {
    /// Create a validated range.
    ///
    /// A degenerate (zero or near-zero) length is a configuration defect and
    /// is rejected here rather than patched over at runtime.
    pub fn new(start: f32, length: f32) -> Result<Self, RigError> {
        if !start.is_finite() || !length.is_finite() {
            return Err(RigError::InvalidRange {
                start,
                length,
                reason: "start and length must be finite",
            });
        }
        if start < 0.0 {
            return Err(RigError::InvalidRange {
                start,
                length,
                reason: "start must be >= 0",
            });
        }
        if length < MIN_LENGTH {
            return Err(RigError::InvalidRange {
                start,
                length,
                reason: "length must be positive",
            });
        }
        if start + length > 1.0 + f32::EPSILON {
            return Err(RigError::InvalidRange {
                start,
                length,
                reason: "start + length must be <= 1",
            });
        }
        Ok(Self { start, length })
    }

    /// Range start within global progress.
    #[inline]
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Range length within global progress.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Range end (`start + length`).
    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Remap global progress into this range's local 0..1 value.
    ///
    /// Pinned to 0 before `start` and 1 after `start + length`; monotone
    /// nondecreasing in `progress`. The epsilon guard keeps this total even
    /// for a range bypassing construction (e.g. deserialized state): such a
    /// range degrades to a step at `start`.
    #[inline]
    #[must_use]
    pub fn local(&self, progress: f32) -> f32 {
        if self.length < MIN_LENGTH {
            return if progress >= self.start { 1.0 } else { 0.0 };
        }
        ((progress - self.start) / self.length).clamp(0.0, 1.0)
    }

    /// Local progress pushed through an easing curve.
    #[inline]
    #[must_use]
    pub fn eased(&self, progress: f32, easing: Easing) -> f32 {
        easing.evaluate(self.local(progress))
    }

    /// A copy of this range shifted later by `offset`, used for staggered
    /// per-entity reveal windows. Re-validated: an offset pushing the window
    /// past the end of the track is a configuration defect.
    pub fn shifted(&self, offset: f32) -> Result<Self, RigError> {
        Self::new(self.start + offset, self.length)
    }
}
