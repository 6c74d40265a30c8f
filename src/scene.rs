//! Scene controller.
//!
//! One explicitly constructed context owns the scroll physics, the object
//! registry and the dot field; there is no ambient global state. Input
//! handlers only mutate fields here, all real work happens in [`Scene::update`]
//! on the frame loop.

use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

use crate::dots::{DotField, DotFieldConfig, MaskImage};
use crate::frame::UpdateInfo;
use crate::object::{Bounds, FollowSource, ObjectParams, VisualObject3D};
use crate::scroll::{PointerKind, Scroll, ScrollError, ScrollMode, Sizes, WheelDelta};

pub type ObjectId = u32;

/// Scene construction parameters. The scroll mode arrives as a raw
/// configuration string; an unrecognized value aborts initialization.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub scroll_mode: String,
    pub content: Sizes,
    pub window: Sizes,
    pub dots: DotFieldConfig,
    pub seed: u64,
}

pub struct Scene {
    scroll: Scroll,
    objects: FnvHashMap<ObjectId, VisualObject3D>,
    next_id: ObjectId,
    window: Sizes,
    dot_config: DotFieldConfig,
    dots: Option<DotField>,
    seed: u64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let mode: ScrollMode = config.scroll_mode.parse()?;
        let scroll = Scroll::new(mode, config.content, config.window)?;
        log::info!(
            "scene init: {:?} scroll, content {}x{}, window {}x{}",
            mode,
            config.content.width,
            config.content.height,
            config.window.width,
            config.window.height
        );
        Ok(Self {
            scroll,
            objects: FnvHashMap::default(),
            next_id: 0,
            window: config.window,
            dot_config: config.dots,
            dots: None,
            seed: config.seed,
        })
    }

    pub fn scroll(&self) -> &Scroll {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut Scroll {
        &mut self.scroll
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Register a new object. Each object gets its own RNG stream derived
    /// from the scene seed so placement stays reproducible per id.
    pub fn add_object(
        &mut self,
        order: u32,
        bounds: Bounds,
        child_bounds: Bounds,
        follow_source: FollowSource,
    ) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        let seed = self.seed ^ (id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        self.objects.insert(
            id,
            VisualObject3D::new(ObjectParams {
                order,
                bounds,
                child_bounds,
                viewport: self.window,
                follow_source,
                seed,
            }),
        );
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&VisualObject3D> {
        self.objects.get(&id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut VisualObject3D> {
        self.objects.get_mut(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = (&ObjectId, &VisualObject3D)> {
        self.objects.iter()
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.scroll.on_pointer_down(x, y);
    }

    /// Route a pointer move to the scroll drag and to every pointer-follow
    /// object.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, kind: PointerKind) {
        self.scroll.on_pointer_move(x, y, kind);
        for object in self.objects.values_mut() {
            if object.follow_source() == FollowSource::Pointer {
                object.target_mouse(x, y);
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.scroll.on_pointer_up();
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) {
        self.scroll.on_wheel(delta);
    }

    /// Propagate new bounds to the scroll physics and every object.
    pub fn on_resize(&mut self, content: Sizes, window: Sizes) -> Result<(), ScrollError> {
        self.scroll.on_resize(content, window)?;
        self.window = window;
        for object in self.objects.values_mut() {
            let bounds = object.bounds();
            let child_bounds = object.child_bounds();
            object.on_resize(window, bounds, child_bounds);
        }
        Ok(())
    }

    /// Single-use completion path for the deferred mask decode: the first
    /// delivery builds the dot field, any repeat is a guarded no-op.
    pub fn on_mask_loaded(&mut self, mask: &MaskImage) {
        if self.dots.is_some() {
            log::debug!("mask delivered twice, keeping existing dot field");
            return;
        }
        self.dots = Some(DotField::generate(mask, &self.dot_config, self.seed));
    }

    pub fn dots(&self) -> Option<&DotField> {
        self.dots.as_ref()
    }

    /// Per-frame tick: scroll physics first, then every object reads the
    /// shared offsets (or keeps its own pointer target) and updates. Objects
    /// that reached the terminal state are swept out of the registry; their
    /// ids are returned so the renderer can release resources.
    pub fn update(&mut self, info: &UpdateInfo) -> SmallVec<[ObjectId; 4]> {
        self.scroll.update(info);
        let offset: Vec2 = self.scroll.current();

        let mut removed: SmallVec<[ObjectId; 4]> = SmallVec::new();
        for (id, object) in self.objects.iter_mut() {
            if object.follow_source() == FollowSource::Scroll {
                object.set_scroll_target(offset);
            }
            object.update(info);
            if object.is_destroyed() {
                removed.push(*id);
            }
        }
        for id in &removed {
            self.objects.remove(id);
            log::debug!("scene released object {}", id);
        }
        removed
    }

    /// Teardown: halt every tween and empty the registry so nothing ticks
    /// after the scene is gone.
    pub fn destroy(&mut self) {
        for object in self.objects.values_mut() {
            object.destroy();
        }
        self.objects.clear();
        self.dots = None;
        log::info!("scene destroyed");
    }
}
