//! Built-in scenes.
//!
//! `default_scene` is the classic checker-floor setup for the ray tracer;
//! `cornell_box` is a closed room lit by an emissive panel for the path tracer.

use crate::{AxisBox, Camera, Color, Light, Material, Plane, Primitive, Scene, Sphere};
use tinyray_math::Vec3;

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &["default", "cornell"];

/// Look up a preset by name. `aspect` is output width over height and sizes
/// the view plane so pixels stay square.
pub fn by_name(name: &str, aspect: f32) -> Option<Scene> {
    let scene = match name.to_ascii_lowercase().as_str() {
        "default" => default_scene(aspect),
        "cornell" | "cornell_box" => cornell_box(aspect),
        _ => return None,
    };
    log::debug!(
        "Built preset '{}' with {} primitives and {} lights",
        name,
        scene.primitives().len(),
        scene.lights().len()
    );
    Some(scene)
}

/// Checker floor, two shiny spheres, a box and one overhead light.
pub fn default_scene(aspect: f32) -> Scene {
    let camera = Camera::look_at(Vec3::new(0.0, 2.0, 14.0), Vec3::new(0.0, 0.0, 0.0), Vec3::Y, 1.0);
    let view_height = 0.6;

    let floor = Material::diffuse(Color::new(0.8, 0.8, 0.8));
    let red = Material::diffuse(Color::new(0.8, 0.1, 0.1)).with_specular(Color::ONE, 20.0);
    let green = Material::diffuse(Color::new(0.1, 0.7, 0.2)).with_specular(Color::splat(0.6), 40.0);
    let blue = Material::diffuse(Color::new(0.2, 0.3, 0.9)).with_specular(Color::splat(0.3), 10.0);

    Scene::new(camera)
        .with_view_plane(view_height * aspect, view_height)
        .with_background(Color::new(0.1, 0.1, 0.25))
        .with_light(Light::new(Vec3::new(-6.0, 12.0, 10.0)))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y), floor))
        .with_primitive(Primitive::new(Sphere::new(Vec3::new(-3.0, 0.0, 0.0), 2.0), red))
        .with_primitive(Primitive::new(Sphere::new(Vec3::new(3.5, 0.0, -2.0), 2.0), green))
        .with_primitive(Primitive::new(
            AxisBox::new(Vec3::new(0.5, -1.0, 4.0), Vec3::splat(2.0)),
            blue,
        ))
}

/// Closed room with coloured side walls and a ceiling light panel.
pub fn cornell_box(aspect: f32) -> Scene {
    let camera = Camera::look_at(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO, Vec3::Y, 1.0);
    let view_height = 0.75;

    let white = Material::diffuse(Color::splat(0.75));
    let red = Material::diffuse(Color::new(0.75, 0.25, 0.25));
    let green = Material::diffuse(Color::new(0.25, 0.75, 0.25));
    let panel = Material::diffuse(Color::ZERO).with_emissive(Color::splat(12.0));

    Scene::new(camera)
        .with_view_plane(view_height * aspect, view_height)
        .with_light(Light::new(Vec3::new(0.0, 4.5, 0.0)))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(0.0, -5.0, 0.0), Vec3::Y), white))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y), white))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z), white))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X), red))
        .with_primitive(Primitive::new(Plane::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X), green))
        .with_primitive(Primitive::new(
            AxisBox::new(Vec3::new(0.0, 4.9, 0.0), Vec3::new(3.0, 0.2, 3.0)),
            panel,
        ))
        .with_primitive(Primitive::new(Sphere::new(Vec3::new(-2.0, -3.5, -1.5), 1.5), white))
        .with_primitive(Primitive::new(
            Sphere::new(Vec3::new(2.2, -3.5, 1.0), 1.5),
            Material::diffuse(Color::splat(0.95)),
        ))
}
