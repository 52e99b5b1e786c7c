//! The scene: primitives, lights, camera, view plane and background.
//!
//! Read-only while a render is running; every type here is `Send + Sync` so
//! the tracers can share `&Scene` across worker threads.

use crate::hittable::{Hittable, RayHit};
use crate::{Camera, Color, Light, Primitive};
use tinyray_math::{Interval, Ray};

/// Minimum accepted hit distance for scene queries.
pub const HIT_EPSILON: f32 = 1e-4;

/// A renderable scene.
#[derive(Debug, Clone)]
pub struct Scene {
    camera: Camera,
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    background: Color,
    width: f32,
    height: f32,
}

impl Scene {
    /// Create an empty scene with a 1x1 view plane and black background.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            primitives: Vec::new(),
            lights: Vec::new(),
            background: Color::ZERO,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Set the metric size of the view plane.
    pub fn with_view_plane(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background colour.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a light. The first light added is the shadow light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Add a primitive.
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Nearest primitive along the ray, or `None` when nothing is struck.
    pub fn intersect_by_ray(&self, ray: &Ray) -> Option<RayHit<'_>> {
        let mut closest: Option<RayHit<'_>> = None;
        let mut ray_t = Interval::forward(HIT_EPSILON);

        for primitive in &self.primitives {
            if let Some(surface) = primitive.shape.hit(ray, ray_t) {
                ray_t = ray_t.with_max(surface.t);
                closest = Some(RayHit::new(surface, primitive));
            }
        }

        closest
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Metric width of the view plane.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Metric height of the view plane.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}
