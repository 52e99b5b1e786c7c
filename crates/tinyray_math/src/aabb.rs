use crate::{Interval, Ray, Vec3};

/// Axis-aligned box, used both as a solid primitive and for extents.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));
        Self { x, y, z }
    }

    /// Create an AABB from its centre and full edge lengths.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self::from_points(center - half, center + half)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Slab test returning the nearest accepted distance and the outward
    /// normal of the face that was crossed there.
    ///
    /// When the ray starts inside the box the exit face is reported.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<(f32, Vec3)> {
        let origin = r.origin();
        let dir = r.direction();

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_normal = Vec3::ZERO;
        let mut exit_normal = Vec3::ZERO;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / dir[axis];
            let mut t0 = (slab.min - origin[axis]) * adinv;
            let mut t1 = (slab.max - origin[axis]) * adinv;

            // t0 crosses the min face, t1 the max face
            let mut near = -unit_axis(axis);
            let mut far = unit_axis(axis);
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
                std::mem::swap(&mut near, &mut far);
            }

            if t0 > t_enter {
                t_enter = t0;
                enter_normal = near;
            }
            if t1 < t_exit {
                t_exit = t1;
                exit_normal = far;
            }
        }

        if t_exit < t_enter {
            return None;
        }

        if ray_t.surrounds(t_enter) {
            Some((t_enter, enter_normal))
        } else if ray_t.surrounds(t_exit) {
            Some((t_exit, exit_normal))
        } else {
            None
        }
    }
}

fn unit_axis(axis: usize) -> Vec3 {
    match axis {
        0 => Vec3::X,
        1 => Vec3::Y,
        _ => Vec3::Z,
    }
}
