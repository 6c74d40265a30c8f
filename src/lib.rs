//! Scroll- and pointer-driven 3D scene core.
//!
//! Three subsystems behind one frame-synchronized update loop: a scroll
//! physics engine unifying wheel/touch/mouse-drag input into momentum-based
//! offsets, a per-object animation engine (follow easing, infinite-field
//! wrap-around, enter/exit/drop-out transitions), and a one-shot procedural
//! sampler scattering points over a sphere from a raster mask. Rendering,
//! layout and asset decode are external; this crate only produces transforms,
//! uniforms and point buffers for them.

pub mod constants;
pub mod dots;
pub mod frame;
pub mod interp;
pub mod object;
pub mod scene;
pub mod scroll;
pub mod tween;

pub use dots::{DotField, DotFieldConfig, MaskImage};
pub use frame::{FrameClock, UpdateInfo};
pub use interp::{lerp, Easing};
pub use object::{
    Bounds, DirectionX, DirectionY, FollowSource, MouseValues, ObjectParams, Phase, Strength,
    VisualObject3D,
};
pub use scene::{ObjectId, Scene, SceneConfig};
pub use scroll::{
    PointerKind, Scroll, ScrollDelta, ScrollError, ScrollMode, Sizes, WheelDelta, WheelUnit,
};
pub use tween::Tween;
