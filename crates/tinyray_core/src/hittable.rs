//! Hittable trait and hit results for ray-object intersection.

use crate::{Material, Primitive, PrimitiveKind};
use tinyray_math::{Interval, Ray, Vec3};

/// Geometric part of an intersection, produced by a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal (not flipped towards the ray)
    pub normal: Vec3,
}

/// Trait for shapes that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit>;
}

/// A scene-level hit: geometry plus the primitive that was struck.
///
/// A miss is `None` at the query site; a `RayHit` always refers to a primitive.
#[derive(Clone, Copy)]
pub struct RayHit<'a> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    /// Primitive owned by the scene
    pub primitive: &'a Primitive,
}

impl<'a> RayHit<'a> {
    pub(crate) fn new(surface: SurfaceHit, primitive: &'a Primitive) -> Self {
        Self {
            t: surface.t,
            point: surface.point,
            normal: surface.normal,
            primitive,
        }
    }

    /// Material of the struck primitive.
    #[inline]
    pub fn material(&self) -> &'a Material {
        &self.primitive.material
    }

    /// Kind of the struck primitive.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.primitive.kind()
    }
}

impl std::fmt::Debug for RayHit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RayHit")
            .field("t", &self.t)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .field("kind", &self.kind())
            .finish()
    }
}
