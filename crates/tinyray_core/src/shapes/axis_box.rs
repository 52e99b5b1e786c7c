//! Solid axis-aligned box primitive.

use crate::hittable::{Hittable, SurfaceHit};
use tinyray_math::{Aabb, Interval, Ray, Vec3};

/// A solid box aligned with the world axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBox {
    bounds: Aabb,
}

impl AxisBox {
    /// Create a box from its centre and full edge lengths.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self {
            bounds: Aabb::from_center_size(center, size),
        }
    }

    /// Create a box spanning two opposite corners.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            bounds: Aabb::from_points(a, b),
        }
    }
}

impl Hittable for AxisBox {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let (t, normal) = self.bounds.hit(ray, ray_t)?;
        Some(SurfaceHit {
            t,
            point: ray.at(t),
            normal,
        })
    }
}
