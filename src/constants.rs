// Shared tuning constants for the scroll physics, object animation and
// dot sampler subsystems.

// Scroll physics
pub const MOUSE_MULTIPLIER: f32 = 2.0; // non-touch pointer deltas are amplified
pub const MOMENTUM_CARRY: f32 = 0.2; // fraction of momentum carried across move ticks
pub const MOMENTUM_DAMPING: f32 = 0.92; // per-frame decay while coasting
pub const MOMENTUM_EPSILON: f32 = 0.05; // coasting stops below this magnitude
pub const SCROLL_EASE: f32 = 0.06; // current -> target convergence per 60 Hz frame

// Wheel normalization (pixels per unit, by delta mode)
pub const WHEEL_PIXEL_STEP: f32 = 1.0;
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;
pub const WHEEL_PAGE_HEIGHT: f32 = 800.0;

// Object follow easing by stacking order: first * quotient^(order - 1)
pub const LERP_FIRST: f32 = 0.2;
pub const LERP_QUOTIENT: f32 = 0.8;
pub const STACK_DEPTH_STEP: f32 = 0.1; // world-space z pushed back per stacking order

// Wrap-around and transitions
pub const DISAPPEAR_OFFSET: f32 = 1.03; // viewport bound multiplier before wrapping
pub const WRAP_ROTATION_SPAN: f32 = 0.03; // random z-rotation scale on reappearance
pub const ENTER_DURATION_MS: f32 = 1400.0;
pub const EXIT_DURATION_MS: f32 = 700.0;
pub const DROP_OUT_DURATION_MS: f32 = 1600.0;
pub const DROP_OUT_SQUASH: f32 = 1.3; // peak y-squash as a fraction of element height
pub const DEFAULT_OPACITY: f32 = 1.0;
pub const STRENGTH_UNIFORM_SCALE: f32 = 0.7; // mouse strength -> u_strength

// Random entry placement dead zone (fractions of viewport)
pub const PLACEMENT_DEAD_ZONE_X: f32 = 1.0 / 5.0;
pub const PLACEMENT_DEAD_ZONE_Y: f32 = 1.0 / 9.0;

// Dot sampler
pub const GLOBE_RADIUS: f32 = 1.0;
pub const DEFAULT_DOT_ROWS: u32 = 180;
pub const DOT_DENSITY_DIVISOR: f32 = 3.5; // density = rows / divisor
pub const ALPHA_SATURATION: u8 = 255; // only fully opaque mask pixels keep a dot

// Frame timing
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0; // slow_down_factor baseline
