//! Easing functions for scroll-synced animation.
//!
//! Provides the easing curves used when remapping local section progress.
//! All functions clamp their input to [0, 1] and are cheap enough to
//! evaluate once per entity per frame.

/// Cubic smoothstep: `t²·(3 − 2t)` on clamped input.
///
/// Identities: `smoothstep(0) = 0`, `smoothstep(1) = 1`,
/// `smoothstep(0.5) = 0.5`, and `smoothstep(x) + smoothstep(1 − x) = 1`.
#[inline]
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic smoothstep (slow start, slow end). The section default.
    Smoothstep,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl Easing {
    /// Default easing: smoothstep, matching the scroll-reveal feel the
    /// section controllers are tuned for.
    pub const DEFAULT: Easing = Easing::Smoothstep;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns the eased value, also in
    /// [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_symmetry() {
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            let sum = smoothstep(x) + smoothstep(1.0 - x);
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "smoothstep(x) + smoothstep(1-x) should be 1, got {sum} at x={x}"
            );
        }
    }

    #[test]
    fn smoothstep_clamps_input() {
        assert_eq!(smoothstep(-0.5), 0.0);
        assert_eq!(smoothstep(1.5), 1.0);
    }

    #[test]
    fn smoothstep_is_nondecreasing() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let y = smoothstep(i as f32 / 100.0);
            assert!(y >= prev, "smoothstep must be monotone");
            prev = y;
        }
    }

    #[test]
    fn linear_endpoints() {
        let linear = Easing::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn quadratic_out_shape() {
        let quad_out = Easing::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn cubic_hermite_endpoints() {
        let hermite = Easing::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn evaluate_clamps_input() {
        let hermite = Easing::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
        assert_eq!(Easing::Smoothstep.evaluate(-1.0), 0.0);
        assert_eq!(Easing::Smoothstep.evaluate(2.0), 1.0);
    }

    #[test]
    fn default_is_smoothstep() {
        assert_eq!(Easing::default(), Easing::Smoothstep);
        assert_eq!(
            Easing::default().evaluate(0.25),
            smoothstep(0.25)
        );
    }
}
