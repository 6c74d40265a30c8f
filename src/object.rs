//! Visual-object animation engine.
//!
//! Each animated item owns its pointer/scroll follow state, a wrap-around
//! offset for the infinite field, and a small transition state machine
//! (idle -> entering -> idle -> exiting -> destroyed, with an independent
//! drop-out). Transitions are plain [`Tween`]s polled from `update`; there
//! is no callback chain to cancel, stopping a tween is enough.

use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::frame::UpdateInfo;
use crate::interp::{lerp, Easing};
use crate::scroll::Sizes;
use crate::tween::Tween;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionX {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionY {
    Up,
    Down,
}

/// Recent movement magnitude, interpolated; feeds the distortion uniform.
#[derive(Clone, Copy, Debug, Default)]
pub struct Strength {
    pub current: f32,
    pub target: f32,
}

/// Per-object pointer/scroll follow state.
#[derive(Clone, Copy, Debug)]
pub struct MouseValues {
    pub current: Vec2,
    pub target: Vec2,
    pub last: Vec2,
    pub direction_x: DirectionX,
    pub direction_y: DirectionY,
    pub strength: Strength,
    /// Constant per-frame drift added to `target` even without input.
    pub auto_speed: Vec2,
}

impl Default for MouseValues {
    fn default() -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            last: Vec2::ZERO,
            direction_x: DirectionX::Left,
            direction_y: DirectionY::Up,
            strength: Strength::default(),
            auto_speed: Vec2::ZERO,
        }
    }
}

/// Layout rectangle of the element an object mirrors (screen pixels).
#[derive(Clone, Copy, Debug, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Whether an object's follow target comes from the shared scroll offsets
/// or from its own pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowSource {
    Scroll,
    Pointer,
}

/// Transition state. `Destroyed` is terminal; drop-out runs independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Entering,
    Exiting,
    Destroyed,
}

struct ScaleTween {
    tween: Tween,
    start: Vec2,
    dest: Vec2,
    /// Entry drift target; `extra_translate` eases along it with progress.
    drift: Vec2,
}

struct OpacityTween {
    tween: Tween,
    from: f32,
    to: f32,
}

struct DropTween {
    tween: Tween,
    rotation_start: f32,
}

pub struct ObjectParams {
    /// Stacking order, 1-based. Further back means slower easing and more
    /// negative base depth.
    pub order: u32,
    pub bounds: Bounds,
    /// Collapsed child rectangle: enter starts here, exit ends here.
    pub child_bounds: Bounds,
    pub viewport: Sizes,
    pub follow_source: FollowSource,
    pub seed: u64,
}

/// One independently animated scene item.
pub struct VisualObject3D {
    order: u32,
    bounds: Bounds,
    child_bounds: Bounds,
    viewport: Sizes,
    follow_source: FollowSource,
    mouse: MouseValues,
    lerp_ease: f32,

    position: Vec3,
    rotation_z: f32,
    scale: Vec2,

    extra: Vec2,
    extra_scale: Vec2,
    extra_translate: Vec2,

    phase: Phase,
    should_follow: bool,
    tween_opacity: f32,

    enter_tween: Option<ScaleTween>,
    exit_tween: Option<ScaleTween>,
    opacity_tween: Option<OpacityTween>,
    drop_tween: Option<DropTween>,

    rng: StdRng,
}

impl VisualObject3D {
    pub fn new(params: ObjectParams) -> Self {
        let order = params.order.max(1);
        let lerp_ease = LERP_FIRST * LERP_QUOTIENT.powi(order as i32 - 1);
        let mut object = Self {
            order,
            bounds: params.bounds,
            child_bounds: params.child_bounds,
            viewport: params.viewport,
            follow_source: params.follow_source,
            mouse: MouseValues::default(),
            lerp_ease,
            position: Vec3::new(0.0, 0.0, -(order as f32) * STACK_DEPTH_STEP),
            rotation_z: 0.0,
            scale: params.bounds.size(),
            extra: Vec2::ZERO,
            extra_scale: Vec2::ZERO,
            extra_translate: Vec2::ZERO,
            phase: Phase::Idle,
            should_follow: params.follow_source == FollowSource::Pointer,
            tween_opacity: 0.0,
            enter_tween: None,
            exit_tween: None,
            opacity_tween: None,
            drop_tween: None,
            rng: StdRng::seed_from_u64(params.seed),
        };
        object.update_x(0.0);
        object.update_y(0.0);
        object
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    pub fn is_dropping_out(&self) -> bool {
        self.drop_tween.is_some()
    }

    pub fn follow_source(&self) -> FollowSource {
        self.follow_source
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn child_bounds(&self) -> Bounds {
        self.child_bounds
    }

    pub fn mouse(&self) -> &MouseValues {
        &self.mouse
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation_z(&self) -> f32 {
        self.rotation_z
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn extra(&self) -> Vec2 {
        self.extra
    }

    pub fn opacity(&self) -> f32 {
        self.tween_opacity
    }

    /// Shader-facing distortion intensity.
    pub fn strength_uniform(&self) -> f32 {
        self.mouse.strength.current * STRENGTH_UNIFORM_SCALE
    }

    /// Shader-facing plane size uniform.
    pub fn plane_size(&self) -> Vec2 {
        self.scale
    }

    pub fn set_should_follow(&mut self, follow: bool) {
        self.should_follow = follow;
    }

    pub fn set_auto_speed(&mut self, auto_speed: Vec2) {
        self.mouse.auto_speed = auto_speed;
    }

    /// Drive the follow target from screen coordinates, recentered on the
    /// element. Ignored while exiting or when following is disabled.
    pub fn target_mouse(&mut self, x: f32, y: f32) {
        if self.phase == Phase::Exiting || self.phase == Phase::Destroyed || !self.should_follow {
            return;
        }
        self.mouse.target.x = -x + self.bounds.left + self.bounds.width * 0.5;
        self.mouse.target.y = y - self.bounds.top - self.bounds.height * 0.5;
    }

    /// Drive the follow target from the shared scroll offsets.
    pub fn set_scroll_target(&mut self, offset: Vec2) {
        if self.phase == Phase::Exiting || self.phase == Phase::Destroyed {
            return;
        }
        self.mouse.target = offset;
    }

    /// Per-frame update: poll transitions, advance follow physics, apply the
    /// screen transform, then the wrap-around check.
    pub fn update(&mut self, info: &UpdateInfo) {
        if self.phase == Phase::Destroyed {
            return;
        }

        self.advance_tweens(info.dt_ms);
        if self.phase == Phase::Destroyed {
            // exit transition completed inside the poll above
            return;
        }

        self.update_mouse_values(info);
        self.update_x(self.mouse.current.x);
        self.update_y(self.mouse.current.y);
        self.handle_infinity_scroll();
    }

    /// Refresh layout on resize: new bounds, rescale, re-apply position,
    /// and re-randomize the resting drift.
    pub fn on_resize(&mut self, viewport: Sizes, bounds: Bounds, child_bounds: Bounds) {
        self.viewport = viewport;
        self.bounds = bounds;
        self.child_bounds = child_bounds;
        self.update_scale();
        self.update_x(self.mouse.current.x);
        self.update_y(self.mouse.current.y);
        self.reset_position();
    }

    /// Enter transition: grow from the collapsed child rectangle to the
    /// natural bounds while drifting in from a random off-center position.
    pub fn animate_in(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.stop_transition_tweens();
        self.rotate_randomly();
        self.phase = Phase::Entering;

        let drift = self.random_position();
        self.enter_tween = Some(ScaleTween {
            tween: Tween::new(ENTER_DURATION_MS, Easing::ExpoInOut),
            start: self.child_bounds.size(),
            dest: self.scale,
            drift,
        });
        self.animate_opacity(DEFAULT_OPACITY, ENTER_DURATION_MS * 0.9, 0.0);
    }

    /// Exit transition: collapse toward the child rectangle and fade out.
    /// Completion is the only automatic path to destruction.
    pub fn animate_out(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.stop_transition_tweens();
        self.phase = Phase::Exiting;

        self.exit_tween = Some(ScaleTween {
            tween: Tween::new(EXIT_DURATION_MS, Easing::ExpoInOut),
            start: self.scale,
            dest: self.child_bounds.size(),
            drift: Vec2::ZERO,
        });
        self.animate_opacity(0.0, EXIT_DURATION_MS, 0.0);
    }

    /// Drop-out: one full z-turn with a sinusoidal y-squash dipping at the
    /// rotation midpoint. Re-entrant calls are no-ops.
    pub fn animate_drop_out(&mut self, delay_ms: f32) {
        if self.phase == Phase::Destroyed || self.drop_tween.is_some() {
            return;
        }
        self.drop_tween = Some(DropTween {
            tween: Tween::with_delay(DROP_OUT_DURATION_MS, delay_ms, Easing::ExpoInOut),
            rotation_start: self.rotation_z,
        });
    }

    /// External destroy. Idempotent; stops every running tween.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.stop_transition_tweens();
        if let Some(drop) = &mut self.drop_tween {
            drop.tween.stop();
        }
        self.drop_tween = None;
        self.phase = Phase::Destroyed;
        log::debug!("object order={} destroyed", self.order);
    }

    fn animate_opacity(&mut self, destination: f32, duration_ms: f32, delay_ms: f32) {
        if let Some(op) = &mut self.opacity_tween {
            op.tween.stop();
        }
        self.opacity_tween = Some(OpacityTween {
            tween: Tween::with_delay(duration_ms, delay_ms, Easing::ExpoInOut),
            from: self.tween_opacity,
            to: destination,
        });
    }

    fn stop_transition_tweens(&mut self) {
        for slot in [&mut self.enter_tween, &mut self.exit_tween] {
            if let Some(st) = slot {
                st.tween.stop();
            }
            *slot = None;
        }
        if let Some(op) = &mut self.opacity_tween {
            op.tween.stop();
        }
        self.opacity_tween = None;
    }

    fn advance_tweens(&mut self, dt_ms: f32) {
        let mut opacity_done = false;
        if let Some(op) = self.opacity_tween.as_mut() {
            let p = op.tween.tick(dt_ms);
            self.tween_opacity = lerp(op.from, op.to, p);
            opacity_done = op.tween.is_finished();
        }
        if opacity_done {
            self.opacity_tween = None;
        }

        let mut entered = false;
        if let Some(st) = self.enter_tween.as_mut() {
            let p = st.tween.tick(dt_ms);
            let cur = Vec2::new(lerp(st.start.x, st.dest.x, p), lerp(st.start.y, st.dest.y, p));
            self.extra_scale.x = -(st.dest.x - cur.x) / 2.0;
            self.extra_scale.y = (st.dest.y - cur.y) / 2.0;
            self.extra_translate = st.drift * p;
            self.scale = cur;
            entered = st.tween.just_finished();
        }
        if entered {
            self.enter_tween = None;
            self.phase = Phase::Idle;
        }

        let mut exited = false;
        if let Some(st) = self.exit_tween.as_mut() {
            let p = st.tween.tick(dt_ms);
            let cur = Vec2::new(lerp(st.start.x, st.dest.x, p), lerp(st.start.y, st.dest.y, p));
            self.extra_scale.x = -(self.bounds.width - cur.x) / 2.0;
            self.extra_scale.y = (self.bounds.height - cur.y) / 2.0;
            self.scale = cur;
            exited = st.tween.just_finished();
        }
        if exited {
            self.exit_tween = None;
            self.destroy();
        }

        let mut drop_done = false;
        let mut drop_rotation_start = 0.0;
        if let Some(drop) = self.drop_tween.as_mut() {
            let p = drop.tween.tick(dt_ms);
            self.rotation_z = drop.rotation_start + p * TAU;
            self.extra_scale.y = -(p * PI).sin() * self.bounds.height * DROP_OUT_SQUASH;
            drop_rotation_start = drop.rotation_start;
            drop_done = drop.tween.just_finished();
        }
        if drop_done {
            self.rotation_z = drop_rotation_start;
            self.drop_tween = None;
        }
    }

    fn update_mouse_values(&mut self, info: &UpdateInfo) {
        let m = &mut self.mouse;
        m.target += m.auto_speed;

        m.direction_x = if m.current.x > m.last.x {
            DirectionX::Left
        } else {
            DirectionX::Right
        };
        m.direction_y = if m.current.y > m.last.y {
            DirectionY::Up
        } else {
            DirectionY::Down
        };

        let ease = (self.lerp_ease * info.slow_down_factor).min(1.0);
        m.strength.current = lerp(m.strength.current, m.strength.target, ease);

        let delta = m.current - m.last;
        m.strength.target = delta.length();

        m.last = m.current;
        m.current.x = lerp(m.current.x, m.target.x, ease);
        m.current.y = lerp(m.current.y, m.target.y, ease);
    }

    fn update_scale(&mut self) {
        self.scale = self.bounds.size();
    }

    fn update_x(&mut self, x: f32) {
        self.position.x = -x + self.bounds.left - self.viewport.width / 2.0 + self.scale.x / 2.0
            - self.extra.x
            - self.extra_scale.x
            - self.extra_translate.x;
    }

    fn update_y(&mut self, y: f32) {
        self.position.y = -y - self.bounds.top + self.viewport.height / 2.0 - self.scale.y / 2.0
            - self.extra.y
            - self.extra_scale.y
            - self.extra_translate.y;
    }

    /// Infinite-field wrap: once an edge crosses the viewport bound scaled
    /// by the disappearance threshold in the direction of travel, shift the
    /// persistent offset by a full content cycle so the object re-enters on
    /// the opposite side. Skipped while dropping out.
    fn handle_infinity_scroll(&mut self) {
        if self.drop_tween.is_some() {
            return;
        }

        let half_x = self.scale.x / 2.0;
        match self.mouse.direction_x {
            DirectionX::Left => {
                let x = self.position.x + half_x;
                if x < (-self.viewport.width / 2.0) * DISAPPEAR_OFFSET {
                    self.extra.x -= (self.viewport.width + self.scale.x) * DISAPPEAR_OFFSET;
                    self.rotate_randomly();
                }
            }
            DirectionX::Right => {
                let x = self.position.x - half_x;
                if x > (self.viewport.width / 2.0) * DISAPPEAR_OFFSET {
                    self.extra.x += (self.viewport.width + self.scale.x) * DISAPPEAR_OFFSET;
                    self.rotate_randomly();
                }
            }
        }

        let half_y = self.scale.y / 2.0;
        match self.mouse.direction_y {
            DirectionY::Up => {
                let y = self.position.y + half_y;
                if y < (-self.viewport.height / 2.0) * DISAPPEAR_OFFSET {
                    self.extra.y -= (self.viewport.height + self.scale.y) * DISAPPEAR_OFFSET;
                    self.rotate_randomly();
                }
            }
            DirectionY::Down => {
                let y = self.position.y - half_y;
                if y > (self.viewport.height / 2.0) * DISAPPEAR_OFFSET {
                    self.extra.y += (self.viewport.height + self.scale.y) * DISAPPEAR_OFFSET;
                    self.rotate_randomly();
                }
            }
        }
    }

    fn rotate_randomly(&mut self) {
        self.rotation_z = self.rng.gen_range(-PI..PI) * WRAP_ROTATION_SPAN;
    }

    fn reset_position(&mut self) {
        self.extra = Vec2::ZERO;
        self.extra_scale = Vec2::ZERO;
        self.extra_translate = self.random_position();
    }

    /// Random placement outside a central dead zone, so entering objects
    /// never drift in from directly behind the content.
    fn random_position(&mut self) -> Vec2 {
        for _ in 0..16 {
            let rx: f32 = self.rng.gen_range(-1.0..1.0);
            let ry: f32 = self.rng.gen_range(-1.0..1.0);
            let x = rx * self.viewport.width / 2.0 - self.bounds.width * rx.signum();
            let y = ry * self.viewport.height / 2.0 - self.bounds.height * ry.signum();

            if x.abs() <= self.viewport.width * PLACEMENT_DEAD_ZONE_X
                && y.abs() <= self.viewport.height * PLACEMENT_DEAD_ZONE_Y
            {
                continue;
            }
            return Vec2::new(x, y);
        }
        // degenerate viewport; fall back to the edge
        Vec2::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }
}
