//! Scalar interpolation driving the carousel's virtual index.
//!
//! The animation owns a single value and eases it toward a target over time;
//! components sample it once per frame and feed the result into the pure
//! mapping functions. No component ever holds a mutable interpolation target.

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Easing curves used by the slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ease {
    /// Constant rate.
    Linear,
    /// Cubic ease in/out; default for programmatic snaps.
    #[default]
    InOut,
    /// Quadratic ease out; used when a fling velocity carries into a snap.
    Out,
}

impl Ease {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// An in-flight interpolation of a scalar value, in wall-clock seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(f64::EPSILON),
            ease,
        }
    }

    /// The value this tween settles on.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_done(&self, now: f64) -> bool {
        now - self.start >= self.duration
    }

    /// Value at `now`; clamped to the endpoints outside the tween's window.
    #[must_use]
    pub fn sample(&self, now: f64) -> f64 {
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        lerp(self.from, self.to, self.ease.apply(t))
    }

    /// Redirect toward a new target mid-flight, continuing from the current
    /// sampled value so the motion stays continuous.
    pub fn retarget(&mut self, now: f64, to: f64, duration: f64) {
        *self = Self::new(self.sample(now), to, now, duration, self.ease);
    }
}
