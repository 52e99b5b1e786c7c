//! Local shading for the deterministic tracer.
//!
//! Planes get a procedural checker; everything else gets ambient plus
//! Lambert and Phong terms summed over all lights.

use crate::TraceFlags;
use tinyray_core::{Color, Light, RayHit};
use tinyray_math::{reflect, Interval, Vec3};

/// Colour of the odd checker cells.
pub const CHECKER_DARK: Color = Color::splat(0.1);

/// Checker colour at `point`: cells are 2 units wide on every axis.
///
/// Each coordinate is halved and truncated towards zero; any odd cell index
/// selects the dark colour, otherwise the surface's diffuse colour is used.
pub fn checker(point: Vec3, diffuse: Color) -> Color {
    let cell = |c: f32| (c / 2.0) as i32;

    if cell(point.x) % 2 != 0 || cell(point.y) % 2 != 0 || cell(point.z) % 2 != 0 {
        CHECKER_DARK
    } else {
        diffuse
    }
}

/// Local radiance at a hit, before any secondary rays.
pub fn calculate_lighting(
    lights: &[Light],
    camera_position: Vec3,
    hit: &RayHit<'_>,
    flags: TraceFlags,
) -> Color {
    let material = hit.material();

    // Planes are pattern only, never lit
    if hit.kind().is_plane() {
        return checker(hit.point, material.diffuse);
    }

    let mut colour = if flags.contains(TraceFlags::AMBIENT) {
        material.ambient
    } else {
        Color::ZERO
    };

    if flags.contains(TraceFlags::DIFFUSE_AND_SPEC) {
        let to_eye = (camera_position - hit.point).normalize_or_zero();

        for light in lights {
            let to_light = (light.position() - hit.point).normalize_or_zero();
            let mirrored = reflect(-to_light, hit.normal);

            let cos_diff = Interval::UNIT.clamp(to_light.dot(hit.normal));
            let cos_spec = Interval::UNIT.clamp(to_eye.dot(mirrored));

            colour += material.diffuse * cos_diff;
            colour += material.specular * cos_spec.powf(material.spec_power);
        }
    }

    colour
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyray_core::{Camera, Material, Plane, Primitive, Scene, Sphere};
    use tinyray_math::Ray;

    fn hit_scene(primitive: Primitive) -> Scene {
        Scene::new(Camera::default()).with_primitive(primitive)
    }

    #[test]
    fn test_checker_cells_alternate() {
        let diffuse = Color::new(0.9, 0.8, 0.7);

        // Same cell as the origin
        assert_eq!(checker(Vec3::new(0.0, 0.0, 0.0), diffuse), diffuse);
        assert_eq!(checker(Vec3::new(1.9, 0.0, 1.9), diffuse), diffuse);

        // One cell over on x or z
        assert_eq!(checker(Vec3::new(2.0, 0.0, 0.0), diffuse), CHECKER_DARK);
        assert_eq!(checker(Vec3::new(0.0, 0.0, 2.5), diffuse), CHECKER_DARK);
        assert_eq!(checker(Vec3::new(0.0, 2.0, 0.0), diffuse), CHECKER_DARK);

        // Two cells over is even again
        assert_eq!(checker(Vec3::new(4.0, 0.0, 0.0), diffuse), diffuse);
        assert_eq!(checker(Vec3::new(2.0, 0.0, 2.0), diffuse), CHECKER_DARK);
    }

    #[test]
    fn test_checker_truncates_towards_zero() {
        let diffuse = Color::ONE;

        // -1.9 / 2 truncates to 0, same cell as the origin
        assert_eq!(checker(Vec3::new(-1.9, 0.0, 0.0), diffuse), diffuse);
        // -2.0 / 2 = -1, odd
        assert_eq!(checker(Vec3::new(-2.0, 0.0, 0.0), diffuse), CHECKER_DARK);
        assert_eq!(checker(Vec3::new(-4.5, 0.0, 0.0), diffuse), diffuse);
    }

    #[test]
    fn test_plane_ignores_lights() {
        let scene = hit_scene(Primitive::new(
            Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y),
            Material::diffuse(Color::new(0.3, 0.6, 0.9)),
        ));
        let ray = Ray::new(Vec3::new(0.5, 5.0, 0.5), Vec3::NEG_Y);
        let hit = scene.intersect_by_ray(&ray).unwrap();

        let lights = [Light::new(Vec3::new(0.0, 10.0, 0.0))];
        let colour = calculate_lighting(&lights, Vec3::new(0.0, 5.0, 0.0), &hit, TraceFlags::WHITTED);
        assert_eq!(colour, Color::new(0.3, 0.6, 0.9));
    }

    #[test]
    fn test_phong_hand_computed() {
        // Unit sphere at the origin, hit head-on at (0, 0, 1)
        let material = Material {
            ambient: Color::new(0.1, 0.1, 0.1),
            diffuse: Color::new(0.6, 0.4, 0.2),
            specular: Color::new(1.0, 1.0, 1.0),
            emissive: Color::ZERO,
            spec_power: 2.0,
        };
        let scene = hit_scene(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = scene.intersect_by_ray(&ray).unwrap();

        // Light at 45 degrees above the normal in the yz-plane
        let light = Light::new(Vec3::new(0.0, 1.0, 2.0));
        let camera = Vec3::new(0.0, 0.0, 5.0);

        // N = (0,0,1), L = (0,1,1)/sqrt2 -> N.L = 1/sqrt2
        // R = reflect(-L, N) = (0,-1,1)/sqrt2, V = (0,0,1) -> V.R = 1/sqrt2
        let c = std::f32::consts::FRAC_1_SQRT_2;
        let expected = material.ambient + material.diffuse * c + material.specular * c.powf(2.0);

        let colour = calculate_lighting(&[light], camera, &hit, TraceFlags::WHITTED);
        assert!((colour - expected).length() < 1e-5, "{colour} != {expected}");
    }

    #[test]
    fn test_lights_are_summed_and_clamped() {
        let material = Material {
            ambient: Color::ZERO,
            diffuse: Color::ONE,
            specular: Color::ZERO,
            emissive: Color::ZERO,
            spec_power: 1.0,
        };
        let scene = hit_scene(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = scene.intersect_by_ray(&ray).unwrap();

        // One light straight ahead, one behind the surface
        let lights = [Light::new(Vec3::new(0.0, 0.0, 10.0)), Light::new(Vec3::new(0.0, 0.0, -10.0))];
        let colour = calculate_lighting(&lights, Vec3::new(0.0, 0.0, 5.0), &hit, TraceFlags::WHITTED);
        assert!((colour - Color::ONE).length() < 1e-5);
    }

    #[test]
    fn test_flags_gate_terms() {
        let material = Material::diffuse(Color::new(0.5, 0.5, 0.5)).with_ambient(Color::splat(0.2));
        let scene = hit_scene(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = scene.intersect_by_ray(&ray).unwrap();
        let lights = [Light::new(Vec3::new(0.0, 0.0, 10.0))];
        let eye = Vec3::new(0.0, 0.0, 5.0);

        let ambient_only = calculate_lighting(&lights, eye, &hit, TraceFlags::AMBIENT);
        assert_eq!(ambient_only, Color::splat(0.2));

        let none = calculate_lighting(&lights, eye, &hit, TraceFlags::empty());
        assert_eq!(none, Color::ZERO);
    }
}
