//! Point lights.

use tinyray_math::Vec3;

/// A point light. Only its position takes part in shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// World-space position of the light.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}
