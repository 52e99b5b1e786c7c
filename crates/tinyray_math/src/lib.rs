// Re-export glam for convenience
pub use glam::*;

// TinyRay math types
mod aabb;
mod interval;
mod optics;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use optics::{reflect, refract};
pub use ray::Ray;
