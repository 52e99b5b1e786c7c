//! Primary ray generation through pixel centres of the view plane.

use tinyray_core::Scene;
use tinyray_math::{Ray, Vec3};

/// View plane of a scene discretised to a framebuffer resolution.
///
/// Rows advance along the camera's up vector and columns along its right
/// vector, starting from the lower-left corner of the plane.
#[derive(Debug, Clone, Copy)]
pub struct ViewPlane {
    eye: Vec3,
    start: Vec3,
    column_step: Vec3,
    row_step: Vec3,
}

impl ViewPlane {
    /// Lay the framebuffer over the scene's view plane.
    pub fn new(scene: &Scene, buff_width: u32, buff_height: u32) -> Self {
        let camera = scene.camera();
        let scene_width = scene.width();
        let scene_height = scene.height();

        // Metric size of one pixel
        let pixel_dx = scene_width / buff_width.max(1) as f32;
        let pixel_dy = scene_height / buff_height.max(1) as f32;

        let start = camera.view_centre()
            - (scene_width * camera.right() + scene_height * camera.up()) / 2.0;

        Self {
            eye: camera.position(),
            start,
            column_step: camera.right() * pixel_dx,
            row_step: camera.up() * pixel_dy,
        }
    }

    /// Point on the view plane at the centre of pixel (row, column).
    pub fn pixel_centre(&self, row: u32, column: u32) -> Vec3 {
        self.start
            + (row as f32 + 0.5) * self.row_step
            + (column as f32 + 0.5) * self.column_step
    }

    /// Ray from the eye through the centre of pixel (row, column).
    pub fn primary_ray(&self, row: u32, column: u32) -> Ray {
        Ray::towards(self.eye, self.pixel_centre(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyray_core::Camera;

    fn scene() -> Scene {
        Scene::new(Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 1.0)).with_view_plane(2.0, 2.0)
    }

    #[test]
    fn test_first_pixel_is_lower_left() {
        let view = ViewPlane::new(&scene(), 2, 2);

        let centre = view.pixel_centre(0, 0);
        assert!((centre - Vec3::new(-0.5, -0.5, -1.0)).length() < 1e-6);

        let centre = view.pixel_centre(1, 1);
        assert!((centre - Vec3::new(0.5, 0.5, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_primary_ray_is_unit_length() {
        let view = ViewPlane::new(&scene(), 7, 3);
        for row in 0..3 {
            for column in 0..7 {
                let ray = view.primary_ray(row, column);
                assert_eq!(ray.origin(), Vec3::ZERO);
                assert!((ray.direction().length() - 1.0).abs() < 1e-5);
                assert!(ray.direction().z < 0.0);
            }
        }
    }
}
