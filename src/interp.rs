//! Interpolation primitives shared by every subsystem.

/// Linear interpolation of `current` toward `target` by `ease` in \[0, 1\].
///
/// `ease = 0` returns `current`, `ease = 1` returns `target`, and the result
/// moves monotonically between the two.
#[inline]
pub fn lerp(current: f32, target: f32, ease: f32) -> f32 {
    current + (target - current) * ease
}

/// Easing curves used by the transition tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Exponential in-out: slow start, fast middle, slow settle.
    ExpoInOut,
}

impl Easing {
    /// Map raw progress `t` in \[0, 1\] through the curve. Endpoints are
    /// fixed: `apply(0) == 0` and `apply(1) == 1` for every variant.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}
