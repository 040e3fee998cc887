//! Scroll progress sources.
//!
//! The rig never reads ambient global state: it is constructed with a
//! [`ProgressProvider`] and queries it once per frame. [`ScrollTrack`] is the
//! stock provider, modeling a virtual multi-page scroll region whose exposed
//! progress exponentially follows the host's raw scroll offset so abrupt
//! wheel input does not pop the scene.

use crate::animation::damp::damp;
use crate::animation::SectionRange;
use crate::error::RigError;

/// Read-only normalized scroll progress, queried once per frame by the rig.
pub trait ProgressProvider {
    /// Current progress in [0, 1]; 0 until the scroll container has been
    /// measured and reported an offset.
    fn progress(&self) -> f32;
}

/// A fixed progress value. Useful in tests and for posing the scene at a
/// known scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedProgress(pub f32);

impl ProgressProvider for FixedProgress {
    #[inline]
    fn progress(&self) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Damped multi-page scroll track.
///
/// The host pushes raw normalized offsets via [`ScrollTrack::set_offset`]
/// (or page positions via [`ScrollTrack::scroll_to_page`]); each frame
/// [`ScrollTrack::update`] pulls the exposed offset toward that target at
/// `follow_rate`. Until the first offset arrives both values are 0.
#[derive(Debug, Clone)]
pub struct ScrollTrack {
    pages: u32,
    follow_rate: f32,
    target: f32,
    offset: f32,
}

impl ScrollTrack {
    /// Create a track spanning `pages` virtual pages.
    ///
    /// `follow_rate` is the exponential rate (1/seconds) at which the exposed
    /// offset chases the raw target; must be positive and finite.
    pub fn new(pages: u32, follow_rate: f32) -> Result<Self, RigError> {
        if pages == 0 {
            return Err(RigError::InvalidTrack(
                "track needs at least one page".to_owned(),
            ));
        }
        if !(follow_rate.is_finite() && follow_rate > 0.0) {
            return Err(RigError::InvalidTrack(format!(
                "follow rate must be positive, got {follow_rate}"
            )));
        }
        Ok(Self {
            pages,
            follow_rate,
            target: 0.0,
            offset: 0.0,
        })
    }

    /// Number of virtual pages.
    #[inline]
    #[must_use]
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Raw target offset last pushed by the host.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Push the host's raw scroll offset (clamped to [0, 1]).
    pub fn set_offset(&mut self, offset: f32) {
        self.target = if offset.is_finite() {
            offset.clamp(0.0, 1.0)
        } else {
            self.target
        };
    }

    /// Push a page position (0 = first page top, `pages - 1` = last page top;
    /// fractional values land between pages).
    pub fn scroll_to_page(&mut self, page: f32) {
        let span = (self.pages.saturating_sub(1)).max(1) as f32;
        self.set_offset(page / span);
    }

    /// Snap the exposed offset to the target, bypassing the damped follow.
    pub fn snap(&mut self) {
        self.offset = self.target;
    }

    /// Advance the damped follow by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.offset = damp(self.offset, self.target, self.follow_rate, dt.max(0.0));
    }

    /// Build a [`SectionRange`] from page units: active from `start_page`
    /// for `span_pages` pages of this track.
    pub fn page_range(&self, start_page: f32, span_pages: f32) -> Result<SectionRange, RigError> {
        let span = (self.pages.saturating_sub(1)).max(1) as f32;
        SectionRange::new(start_page / span, span_pages / span)
    }

    /// Current page position derived from the exposed offset.
    #[inline]
    #[must_use]
    pub fn page(&self) -> f32 {
        self.offset * (self.pages.saturating_sub(1)).max(1) as f32
    }
}

impl ProgressProvider for ScrollTrack {
    #[inline]
    fn progress(&self) -> f32 {
        self.offset
    }
}

impl Default for ScrollTrack {
    /// Six pages followed at rate 6.0, matching the stock showcase track.
    fn default() -> Self {
        Self {
            pages: 6,
            follow_rate: 6.0,
            target: 0.0,
            offset: 0.0,
        }
    }
}
