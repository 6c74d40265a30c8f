//! Scroll physics engine.
//!
//! Wheel, touch and mouse-drag input are normalized into one signed scroll
//! delta feeding a momentum model: `target` accumulates input, `current`
//! chases it with an eased per-frame step, and released drags keep coasting
//! on a geometrically decaying momentum value.

use glam::Vec2;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::*;
use crate::frame::UpdateInfo;
use crate::interp::{lerp, Easing};
use crate::tween::Tween;

#[derive(Debug, Error)]
pub enum ScrollError {
    #[error("invalid scroll mode {0:?} (expected \"vertical\" or \"horizontal\")")]
    InvalidMode(String),
    #[error("content and window sizes must be positive and finite")]
    InvalidBounds,
}

/// Scroll axis, fixed for the scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Vertical,
    Horizontal,
}

impl FromStr for ScrollMode {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(ScrollMode::Vertical),
            "horizontal" => Ok(ScrollMode::Horizontal),
            other => Err(ScrollError::InvalidMode(other.to_string())),
        }
    }
}

/// Width/height pair for content and window bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sizes {
    pub width: f32,
    pub height: f32,
}

impl Sizes {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Distinguishes touch contacts from mouse-like pointers; mouse drags are
/// amplified by `MOUSE_MULTIPLIER`, touch moves pass through 1:1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Unit of a platform wheel event's delta values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelUnit {
    Pixel,
    Line,
    Page,
}

/// Raw wheel input, normalized to pixels before it reaches the physics.
#[derive(Clone, Copy, Debug)]
pub struct WheelDelta {
    pub delta_x: f32,
    pub delta_y: f32,
    pub unit: WheelUnit,
}

impl WheelDelta {
    /// Collapse device variance to a pixel-space delta pair.
    pub fn pixels(&self) -> Vec2 {
        let step = match self.unit {
            WheelUnit::Pixel => WHEEL_PIXEL_STEP,
            WheelUnit::Line => WHEEL_LINE_HEIGHT,
            WheelUnit::Page => WHEEL_PAGE_HEIGHT,
        };
        Vec2::new(self.delta_x * step, self.delta_y * step)
    }
}

/// Pixel delta applied to the scroll target; the active axis is selected by
/// the scroll mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollDelta {
    pub horizontal_px: f32,
    pub vertical_px: f32,
}

struct Seek {
    tween: Tween,
    from: f32,
    to: f32,
}

/// One scroll-enabled scene's physics state.
pub struct Scroll {
    mode: ScrollMode,
    current: Vec2,
    target: Vec2,
    last: Vec2,
    touch_momentum: f32,
    is_touching: bool,
    use_momentum: bool,
    last_touch: Vec2,
    content: Sizes,
    window: Sizes,
    seek: Option<Seek>,
}

impl Scroll {
    /// Build the engine with an initial resize to establish valid offsets.
    /// Invalid bounds are a fatal configuration error.
    pub fn new(mode: ScrollMode, content: Sizes, window: Sizes) -> Result<Self, ScrollError> {
        let mut scroll = Self {
            mode,
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            last: Vec2::ZERO,
            touch_momentum: 0.0,
            is_touching: false,
            use_momentum: false,
            last_touch: Vec2::ZERO,
            content: Sizes::default(),
            window: Sizes::default(),
            seek: None,
        };
        scroll.on_resize(content, window)?;
        Ok(scroll)
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Offset from the previous frame, before the current lerp step.
    pub fn last(&self) -> Vec2 {
        self.last
    }

    pub fn is_touching(&self) -> bool {
        self.is_touching
    }

    pub fn touch_momentum(&self) -> f32 {
        self.touch_momentum
    }

    /// Begin a drag: anchor the pointer and suspend momentum.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.seek = None;
        self.is_touching = true;
        self.use_momentum = false;
        self.last_touch = Vec2::new(x, y);
    }

    /// Drag move. Ignored unless a drag is active, so stray hover events
    /// never scroll.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, kind: PointerKind) {
        if !self.is_touching {
            return;
        }

        let multiplier = match kind {
            PointerKind::Mouse => MOUSE_MULTIPLIER,
            PointerKind::Touch => 1.0,
        };
        let touch = Vec2::new(x, y);
        let delta = (touch - self.last_touch) * multiplier;
        self.last_touch = touch;

        self.touch_momentum *= MOMENTUM_CARRY;
        self.touch_momentum += match self.mode {
            ScrollMode::Vertical => delta.y,
            ScrollMode::Horizontal => delta.x,
        };

        self.apply_scroll(ScrollDelta {
            horizontal_px: delta.x,
            vertical_px: delta.y,
        });
    }

    /// End a drag: whatever momentum was built keeps the scroll coasting.
    pub fn on_pointer_up(&mut self) {
        self.is_touching = false;
        self.use_momentum = true;
    }

    /// Wheel input. Sign-inverted: wheel-down moves content up.
    pub fn on_wheel(&mut self, delta: WheelDelta) {
        self.use_momentum = false;
        let px = delta.pixels();
        self.apply_scroll(ScrollDelta {
            horizontal_px: -px.y,
            vertical_px: -px.y,
        });
    }

    /// Refresh bounds and reseed the active axis so the scene stays at the
    /// same scroll progress across the resize. Also the initializer.
    pub fn on_resize(&mut self, content: Sizes, window: Sizes) -> Result<(), ScrollError> {
        if !content.is_valid() || !window.is_valid() {
            return Err(ScrollError::InvalidBounds);
        }

        self.seek = None;
        self.use_momentum = false;

        let progress = self.progress();
        self.content = content;
        self.window = window;

        let offset = progress * self.max_offset();
        match self.mode {
            ScrollMode::Vertical => {
                self.last = Vec2::new(0.0, offset);
                self.current = Vec2::new(0.0, offset);
                self.target = Vec2::new(0.0, offset);
            }
            ScrollMode::Horizontal => {
                self.last = Vec2::new(offset, 0.0);
                self.current = Vec2::new(offset, 0.0);
                self.target = Vec2::new(offset, 0.0);
            }
        }
        Ok(())
    }

    /// Accumulate a pixel delta into the target offset. Offsets are signed
    /// and unbounded; clamping happens only at the progress mapping, since
    /// wrap-around scenes scroll indefinitely.
    pub fn apply_scroll(&mut self, delta: ScrollDelta) {
        match self.mode {
            ScrollMode::Vertical => self.target.y += delta.vertical_px,
            ScrollMode::Horizontal => self.target.x += delta.horizontal_px,
        }
    }

    /// Animate the active-axis target to a destination progress value.
    /// Cancelled by any pointer-down or resize.
    pub fn seek_to(&mut self, progress: f32, duration_ms: f32) {
        let from = self.axis_value(self.target);
        let to = progress.clamp(0.0, 1.0) * self.max_offset();
        self.seek = Some(Seek {
            tween: Tween::new(duration_ms, Easing::ExpoInOut),
            from,
            to,
        });
    }

    /// Per-frame tick: advance the seek tween, apply decaying momentum, then
    /// ease `current` toward `target`.
    pub fn update(&mut self, info: &UpdateInfo) {
        let mut seek_done = false;
        if let Some(seek) = &mut self.seek {
            let p = seek.tween.tick(info.dt_ms);
            let value = lerp(seek.from, seek.to, p);
            match self.mode {
                ScrollMode::Vertical => self.target.y = value,
                ScrollMode::Horizontal => self.target.x = value,
            }
            seek_done = seek.tween.is_finished();
        }
        if seek_done {
            self.seek = None;
        }

        if self.use_momentum && !self.is_touching {
            if self.touch_momentum.abs() > MOMENTUM_EPSILON {
                self.apply_scroll(ScrollDelta {
                    horizontal_px: self.touch_momentum,
                    vertical_px: self.touch_momentum,
                });
                self.touch_momentum *= MOMENTUM_DAMPING;
            } else {
                self.touch_momentum = 0.0;
                self.use_momentum = false;
            }
        }

        let ease = (SCROLL_EASE * info.slow_down_factor).min(1.0);
        self.last = self.current;
        self.current.x = lerp(self.current.x, self.target.x, ease);
        self.current.y = lerp(self.current.y, self.target.y, ease);
    }

    /// Scroll progress in \[0, 1\] along the active axis.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.axis_value(self.current) / max).clamp(0.0, 1.0)
    }

    fn max_offset(&self) -> f32 {
        match self.mode {
            ScrollMode::Vertical => (self.content.height - self.window.height).max(0.0),
            ScrollMode::Horizontal => (self.content.width - self.window.width).max(0.0),
        }
    }

    fn axis_value(&self, v: Vec2) -> f32 {
        match self.mode {
            ScrollMode::Vertical => v.y,
            ScrollMode::Horizontal => v.x,
        }
    }
}
