//! Poll-driven tween runtime.
//!
//! Transitions are advanced by the per-frame tick instead of completion
//! callbacks: callers hold a [`Tween`], feed it elapsed milliseconds, read
//! the eased progress back, and check [`Tween::just_finished`] to run any
//! completion step exactly once. Stopping a tween mid-flight has no side
//! effects beyond freezing its progress.

use crate::interp::Easing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenState {
    Delayed,
    Running,
    Finished,
    Stopped,
}

/// A one-shot progress tween: optional delay, fixed duration, easing curve.
#[derive(Clone, Debug)]
pub struct Tween {
    delay_ms: f32,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    state: TweenState,
    completion_seen: bool,
}

impl Tween {
    pub fn new(duration_ms: f32, easing: Easing) -> Self {
        Self::with_delay(duration_ms, 0.0, easing)
    }

    pub fn with_delay(duration_ms: f32, delay_ms: f32, easing: Easing) -> Self {
        let state = if delay_ms > 0.0 {
            TweenState::Delayed
        } else {
            TweenState::Running
        };
        Self {
            delay_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
            elapsed_ms: 0.0,
            state,
            completion_seen: false,
        }
    }

    /// Advance by `dt_ms` and return the eased progress in \[0, 1\].
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        match self.state {
            TweenState::Finished | TweenState::Stopped => return self.progress(),
            TweenState::Delayed => {
                self.delay_ms -= dt_ms;
                if self.delay_ms > 0.0 {
                    return 0.0;
                }
                // spill the overshoot into the running phase
                self.elapsed_ms = -self.delay_ms;
                self.delay_ms = 0.0;
                self.state = TweenState::Running;
            }
            TweenState::Running => {
                self.elapsed_ms += dt_ms;
            }
        }
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.state = TweenState::Finished;
        }
        self.progress()
    }

    /// Eased progress at the current elapsed time, without advancing.
    pub fn progress(&self) -> f32 {
        if self.state == TweenState::Delayed {
            return 0.0;
        }
        let raw = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        self.easing.apply(raw)
    }

    /// Halt mid-flight. The tween never reports completion afterwards.
    pub fn stop(&mut self) {
        if self.state != TweenState::Finished {
            self.state = TweenState::Stopped;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == TweenState::Finished
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TweenState::Delayed | TweenState::Running)
    }

    /// True exactly once, on the first call after the tween ran to completion.
    pub fn just_finished(&mut self) -> bool {
        if self.state == TweenState::Finished && !self.completion_seen {
            self.completion_seen = true;
            true
        } else {
            false
        }
    }
}
