//! TinyRay Core - Scene description consumed by the tracers.
//!
//! This crate provides:
//!
//! - **Surface types**: `Material`, `Primitive`, `PrimitiveKind`, `Shape`
//! - **Shapes**: `Plane`, `Sphere`, `AxisBox`, `Triangle`
//! - **Scene**: camera, point lights, background and nearest-hit queries
//! - **Presets**: ready-made scenes for the driver and tests
//!
//! # Example
//!
//! ```ignore
//! use tinyray_core::presets;
//!
//! let scene = presets::default_scene(4.0 / 3.0);
//! if let Some(hit) = scene.intersect_by_ray(&ray) {
//!     println!("hit a {:?} at {}", hit.kind(), hit.point);
//! }
//! ```

pub mod camera;
pub mod hittable;
pub mod light;
pub mod material;
pub mod presets;
pub mod primitive;
pub mod scene;
pub mod shapes;

// Re-export commonly used types
pub use camera::Camera;
pub use hittable::{Hittable, RayHit, SurfaceHit};
pub use light::Light;
pub use material::{Color, Material};
pub use primitive::{Primitive, PrimitiveKind, Shape};
pub use scene::{Scene, HIT_EPSILON};
pub use shapes::{AxisBox, Plane, Sphere, Triangle};

/// Re-export the math types scenes are built from
pub use tinyray_math::{Aabb, Interval, Ray, Vec3};
