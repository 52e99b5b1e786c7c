//! Pinhole camera: eye position, orthonormal view basis and view-plane centre.

use tinyray_math::Vec3;

/// Camera with an explicit view basis.
///
/// The view plane sits `focal_distance` along `view`; its metric extents
/// belong to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    view: Vec3,
    view_centre: Vec3,
}

impl Camera {
    /// Build a camera at `eye` looking towards `target`.
    ///
    /// `world_up` only fixes the roll; the stored up vector is re-orthogonalised.
    pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3, focal_distance: f32) -> Self {
        let view = (target - eye).normalize();
        let right = view.cross(world_up).normalize();
        let up = right.cross(view);

        Self {
            position: eye,
            right,
            up,
            view,
            view_centre: eye + view * focal_distance,
        }
    }

    /// Eye position; every primary ray starts here.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn view(&self) -> Vec3 {
        self.view
    }

    /// Centre of the view plane.
    pub fn view_centre(&self) -> Vec3 {
        self.view_centre
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 1.0)
    }
}
