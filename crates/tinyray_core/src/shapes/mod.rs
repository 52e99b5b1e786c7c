//! Analytic shapes supported by the scene.

mod axis_box;
mod plane;
mod sphere;
mod triangle;

pub use axis_box::AxisBox;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;
