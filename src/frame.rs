use instant::Instant;

use crate::constants::REFERENCE_FRAME_MS;

/// Per-frame timing handed to every `update` in the scene.
#[derive(Clone, Copy, Debug)]
pub struct UpdateInfo {
    /// Elapsed wall time since the previous frame, in milliseconds.
    pub dt_ms: f32,
    /// `dt_ms` normalized against a 60 Hz frame, so easing applied once per
    /// frame converges at the same rate regardless of refresh rate.
    pub slow_down_factor: f32,
}

impl UpdateInfo {
    pub fn from_dt_ms(dt_ms: f32) -> Self {
        Self {
            dt_ms,
            slow_down_factor: dt_ms / REFERENCE_FRAME_MS,
        }
    }
}

/// Wall-clock source for the frame loop.
pub struct FrameClock {
    last_instant: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
        }
    }

    /// Measure the time since the previous call and derive the frame's
    /// `UpdateInfo`. The very first call reports a near-zero delta.
    pub fn tick(&mut self) -> UpdateInfo {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        UpdateInfo::from_dt_ms(dt.as_secs_f32() * 1000.0)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
