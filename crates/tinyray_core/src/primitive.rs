//! Primitives: a shape plus the material attached to it.

use crate::hittable::{Hittable, SurfaceHit};
use crate::shapes::{AxisBox, Plane, Sphere, Triangle};
use crate::Material;
use tinyray_math::{Interval, Ray};

/// Kind tag of a primitive, carrying the per-kind optical policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Plane,
    Sphere,
    Box,
    Triangle,
}

impl PrimitiveKind {
    /// Planes are the ground/walls: checker shaded, never reflected,
    /// refracted or counted as shadow casters.
    #[inline]
    pub fn is_plane(self) -> bool {
        matches!(self, PrimitiveKind::Plane)
    }

    /// Refractive index used by the deterministic tracer.
    ///
    /// Kinds without a medium report 0.0, which zeroes the surface's own
    /// contribution in the refraction step.
    #[inline]
    pub fn refractive_index(self) -> f32 {
        match self {
            PrimitiveKind::Sphere => 1.5,
            PrimitiveKind::Box => 0.9,
            PrimitiveKind::Plane | PrimitiveKind::Triangle => 0.0,
        }
    }

    /// Whether the path tracer mirrors rays off this kind when glossy
    /// reflection is enabled.
    #[inline]
    pub fn is_glossy(self) -> bool {
        matches!(self, PrimitiveKind::Sphere | PrimitiveKind::Box)
    }
}

/// Closed set of supported shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Box(AxisBox),
    Triangle(Triangle),
}

impl Shape {
    /// The kind tag for this shape.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Plane(_) => PrimitiveKind::Plane,
            Shape::Sphere(_) => PrimitiveKind::Sphere,
            Shape::Box(_) => PrimitiveKind::Box,
            Shape::Triangle(_) => PrimitiveKind::Triangle,
        }
    }
}

impl Hittable for Shape {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        match self {
            Shape::Plane(plane) => plane.hit(ray, ray_t),
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Box(aabb) => aabb.hit(ray, ray_t),
            Shape::Triangle(tri) => tri.hit(ray, ray_t),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<AxisBox> for Shape {
    fn from(aabb: AxisBox) -> Self {
        Shape::Box(aabb)
    }
}

impl From<Triangle> for Shape {
    fn from(tri: Triangle) -> Self {
        Shape::Triangle(tri)
    }
}

/// A shape with its material. Owned by the scene.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    /// Create a new primitive.
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Kind tag of the underlying shape.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }
}
