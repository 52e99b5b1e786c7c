//! Deterministic recursive ray tracer.
//!
//! One primary ray per pixel. At each hit the local Phong shading is
//! combined with:
//! - a mirror bounce, multiplied in as attenuation
//! - a refracted bounce, added on top of the index-weighted surface colour
//! - a hard shadow test against the first light
//!
//! Both bounces draw from one depth budget that is passed by value.

use crate::bucket::{render_buckets, DEFAULT_BUCKET_SIZE};
use crate::settings::{RenderSettings, SettingsResult};
use crate::view::ViewPlane;
use crate::{shading, Framebuffer, RenderStatus, TraceFlags};
use std::time::Instant;
use tinyray_core::{Color, Scene};
use tinyray_math::{reflect, refract, Interval, Ray};

/// Default recursion budget.
pub const DEFAULT_TRACE_LEVEL: u32 = 5;

/// Origin offset along the normal for reflection and shadow rays.
pub const SURFACE_OFFSET: f32 = 1e-5;

/// Origin offset against the normal for refracted rays.
pub const REFRACTION_OFFSET: f32 = 4.001;

/// Multiplier applied to surfaces occluded from the first light.
pub const SHADOW_FACTOR: f32 = 0.55;

/// Whitted-style tracer owning its framebuffer.
pub struct RayTracer {
    framebuffer: Framebuffer,
    trace_level: u32,
    flags: TraceFlags,
    render_count: u32,
    bucket_size: u32,
}

impl RayTracer {
    /// Create a tracer for a `width` x `height` output.
    ///
    /// Starts with ambient-only shading and no recursion effects.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            trace_level: DEFAULT_TRACE_LEVEL,
            flags: TraceFlags::AMBIENT,
            render_count: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }

    /// Create a tracer from validated settings.
    pub fn from_settings(settings: &RenderSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings.width, settings.height)
            .with_flags(settings.trace_flags()?)
            .with_trace_level(settings.trace_level)
            .with_bucket_size(settings.bucket_size))
    }

    /// Set the effect flags.
    pub fn with_flags(mut self, flags: TraceFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the recursion budget.
    pub fn with_trace_level(mut self, level: u32) -> Self {
        self.trace_level = level;
        self
    }

    /// Set the tile size used to spread work across threads.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size.max(1);
        self
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: TraceFlags) {
        self.flags = flags;
    }

    pub fn trace_level(&self) -> u32 {
        self.trace_level
    }

    pub fn set_trace_level(&mut self, level: u32) {
        self.trace_level = level;
    }

    /// Number of completed full-frame renders since the last reset.
    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    /// Allow the next [`RayTracer::render`] call to run again.
    pub fn reset_render_count(&mut self) {
        self.render_count = 0;
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Render the whole frame, unless a frame was already rendered since the
    /// last reset.
    pub fn render(&mut self, scene: &Scene) -> RenderStatus {
        if self.render_count != 0 {
            log::warn!("Ray trace skipped: frame already rendered, reset the render count first");
            return RenderStatus::Skipped;
        }

        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let view = ViewPlane::new(scene, width, height);
        let background = scene.background();

        log::info!(
            "Trace start: {}x{}, depth {}, flags {:?}",
            width,
            height,
            self.trace_level,
            self.flags
        );
        let start = Instant::now();

        let results = render_buckets(width, height, self.bucket_size, |row, column| {
            let ray = view.primary_ray(row, column);
            self.trace_scene(scene, &ray, background, self.trace_level)
        });

        for result in &results {
            self.framebuffer.write_bucket(result);
        }

        log::info!("Ray tracing complete in {:?}", start.elapsed());
        self.render_count += 1;
        RenderStatus::Rendered
    }

    /// Colour seen along `ray`; `incoming` is returned when nothing is hit.
    ///
    /// `depth` is the remaining number of recursive bounces.
    pub fn trace_scene(&self, scene: &Scene, ray: &Ray, incoming: Color, depth: u32) -> Color {
        let Some(hit) = scene.intersect_by_ray(ray) else {
            return incoming;
        };

        let flags = self.flags;
        let kind = hit.kind();
        let mut depth = depth;
        let mut colour =
            shading::calculate_lighting(scene.lights(), scene.camera().position(), &hit, flags);

        if flags.contains(TraceFlags::REFLECTION) && !kind.is_plane() && depth != 0 {
            let reflected = Ray::new(
                hit.point + hit.normal * SURFACE_OFFSET,
                reflect(ray.direction(), hit.normal),
            );
            depth -= 1;
            colour *= self.trace_scene(scene, &reflected, incoming, depth);
        }

        if flags.contains(TraceFlags::REFRACTION) && !kind.is_plane() && depth != 0 {
            let index = kind.refractive_index();
            let cos = Interval::UNIT.clamp(ray.direction().dot(hit.normal));
            // Kinds without a medium bend straight along the inverse normal
            let eta = if index > 0.0 { cos / index } else { 0.0 };

            let refracted = Ray::new(
                hit.point - hit.normal * REFRACTION_OFFSET,
                refract(ray.direction(), hit.normal, eta),
            );
            depth -= 1;
            colour = colour * index + self.trace_scene(scene, &refracted, colour, depth);
        }

        if flags.contains(TraceFlags::SHADOW) {
            if let Some(light) = scene.lights().first() {
                let shadow_ray = Ray::towards(hit.point + hit.normal * SURFACE_OFFSET, light.position());

                // A miss casts no shadow
                let occluded = scene
                    .intersect_by_ray(&shadow_ray)
                    .is_some_and(|blocker| !blocker.kind().is_plane());
                if occluded {
                    colour *= SHADOW_FACTOR;
                }
            }
        }

        colour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyray_core::{AxisBox, Camera, Light, Material, Plane, Primitive, Sphere, Triangle};
    use tinyray_math::Vec3;

    const BACKGROUND: Color = Color::new(0.2, 0.4, 0.8);

    fn eye() -> Vec3 {
        Vec3::new(0.0, 0.0, 5.0)
    }

    fn flat(diffuse: Color) -> Material {
        Material {
            ambient: Color::ZERO,
            diffuse,
            specular: Color::ZERO,
            emissive: Color::ZERO,
            spec_power: 1.0,
        }
    }

    /// Unit sphere at the origin, light behind the eye.
    fn mirror_scene(diffuse: Color) -> Scene {
        Scene::new(Camera::look_at(eye(), Vec3::ZERO, Vec3::Y, 1.0))
            .with_background(BACKGROUND)
            .with_light(Light::new(Vec3::new(0.0, 0.0, 10.0)))
            .with_primitive(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), flat(diffuse)))
    }

    fn axis_ray() -> Ray {
        Ray::new(eye(), Vec3::NEG_Z)
    }

    #[test]
    fn test_miss_returns_incoming() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::all());
        let scene = mirror_scene(Color::ONE);
        let ray = Ray::new(eye(), Vec3::Z);

        assert_eq!(tracer.trace_scene(&scene, &ray, BACKGROUND, 5), BACKGROUND);
    }

    #[test]
    fn test_white_mirror_reproduces_background() {
        let tracer = RayTracer::new(1, 1)
            .with_flags(TraceFlags::DIFFUSE_AND_SPEC | TraceFlags::REFLECTION);
        let scene = mirror_scene(Color::ONE);

        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 1);
        assert!((colour - BACKGROUND).length() < 1e-5, "{colour}");
    }

    #[test]
    fn test_half_mirror_halves_background() {
        let tracer = RayTracer::new(1, 1)
            .with_flags(TraceFlags::DIFFUSE_AND_SPEC | TraceFlags::REFLECTION);
        let scene = mirror_scene(Color::splat(0.5));

        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 1);
        assert!((colour - BACKGROUND * 0.5).length() < 1e-5, "{colour}");
    }

    #[test]
    fn test_zero_depth_is_local_shading_only() {
        let tracer = RayTracer::new(1, 1).with_flags(
            TraceFlags::DIFFUSE_AND_SPEC | TraceFlags::REFLECTION | TraceFlags::REFRACTION,
        );
        let scene = mirror_scene(Color::splat(0.5));

        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 0);
        assert!((colour - Color::splat(0.5)).length() < 1e-5, "{colour}");
    }

    #[test]
    fn test_planes_never_reflect() {
        let scene = Scene::new(Camera::default())
            .with_background(BACKGROUND)
            .with_primitive(Primitive::new(Plane::new(Vec3::ZERO, Vec3::Y), flat(Color::ONE)));
        let ray = Ray::new(Vec3::new(0.5, 4.0, 0.5), Vec3::new(0.0, -1.0, -0.2));

        let with = RayTracer::new(1, 1).with_flags(TraceFlags::WHITTED);
        let without = RayTracer::new(1, 1).with_flags(TraceFlags::AMBIENT);

        assert_eq!(
            with.trace_scene(&scene, &ray, BACKGROUND, 5),
            without.trace_scene(&scene, &ray, BACKGROUND, 5)
        );
    }

    #[test]
    fn test_refraction_through_sphere_adds_scene_behind() {
        // Eye-to-sphere rays hit the front face, so the incidence cosine clamps
        // to zero and the refracted ray leaves along the inverse normal.
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::REFRACTION | TraceFlags::AMBIENT);
        let material = flat(Color::ZERO).with_ambient(Color::splat(0.1));
        let scene = Scene::new(Camera::default())
            .with_background(BACKGROUND)
            .with_primitive(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material));

        // The refracted ray misses, so it returns the surface colour it was
        // handed: 0.1 * 1.5 + 0.1
        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 1);
        assert!((colour - (Color::splat(0.15) + Color::splat(0.1))).length() < 1e-5, "{colour}");
    }

    #[test]
    fn test_refraction_through_triangle_has_zero_index() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::REFRACTION | TraceFlags::AMBIENT);
        let material = flat(Color::ZERO).with_ambient(Color::splat(0.2));
        let triangle = Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let scene = Scene::new(Camera::default())
            .with_background(BACKGROUND)
            .with_primitive(Primitive::new(triangle, material));

        // Index 0 drops the surface term; the escaping refracted ray returns
        // the surface colour it was handed: 0.2 * 0 + 0.2
        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 1);
        assert!((colour - Color::splat(0.2)).length() < 1e-6, "{colour}");
    }

    #[test]
    fn test_shadow_darkens_when_box_blocks_light() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::AMBIENT | TraceFlags::SHADOW);
        let material = flat(Color::ZERO).with_ambient(Color::splat(0.4));
        let scene = Scene::new(Camera::default())
            .with_light(Light::new(Vec3::new(0.0, 10.0, 1.0)))
            .with_primitive(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material))
            .with_primitive(Primitive::new(
                AxisBox::new(Vec3::new(0.0, 5.0, 1.0), Vec3::ONE),
                material,
            ));

        // The shadow ray leaves (0, 0, 1) straight up and meets the box
        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 5);
        assert!((colour - Color::splat(0.4 * SHADOW_FACTOR)).length() < 1e-6);
    }

    #[test]
    fn test_shadow_miss_does_not_darken() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::AMBIENT | TraceFlags::SHADOW);
        let material = flat(Color::ZERO).with_ambient(Color::splat(0.4));
        let scene = Scene::new(Camera::default())
            .with_light(Light::new(Vec3::new(0.0, 0.0, 10.0)))
            .with_primitive(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material));

        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 5);
        assert_eq!(colour, Color::splat(0.4));
    }

    #[test]
    fn test_shadow_ignores_plane_blockers() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::AMBIENT | TraceFlags::SHADOW);
        let material = flat(Color::ZERO).with_ambient(Color::splat(0.4));
        let scene = Scene::new(Camera::default())
            .with_light(Light::new(Vec3::new(0.0, 10.0, 1.0)))
            .with_primitive(Primitive::new(Sphere::new(Vec3::ZERO, 1.0), material))
            .with_primitive(Primitive::new(
                Plane::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y),
                material,
            ));

        let colour = tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 5);
        assert_eq!(colour, Color::splat(0.4));
    }

    #[test]
    fn test_shadow_without_lights_is_skipped() {
        let tracer = RayTracer::new(1, 1).with_flags(TraceFlags::AMBIENT | TraceFlags::SHADOW);
        let scene = Scene::new(Camera::default()).with_primitive(Primitive::new(
            Sphere::new(Vec3::ZERO, 1.0),
            flat(Color::ZERO).with_ambient(Color::splat(0.4)),
        ));

        assert_eq!(tracer.trace_scene(&scene, &axis_ray(), BACKGROUND, 5), Color::splat(0.4));
    }

    #[test]
    fn test_render_guard() {
        let scene = mirror_scene(Color::ONE);
        let mut tracer = RayTracer::new(4, 4);

        assert_eq!(tracer.render(&scene), RenderStatus::Rendered);
        assert_eq!(tracer.render_count(), 1);
        assert_eq!(tracer.render(&scene), RenderStatus::Skipped);
        assert_eq!(tracer.render_count(), 1);

        tracer.reset_render_count();
        assert_eq!(tracer.render(&scene), RenderStatus::Rendered);
    }

    #[test]
    fn test_from_settings() {
        let settings = RenderSettings {
            width: 8,
            height: 4,
            trace_level: 2,
            ..Default::default()
        };
        let tracer = RayTracer::from_settings(&settings).unwrap();

        assert_eq!(tracer.framebuffer().width(), 8);
        assert_eq!(tracer.framebuffer().height(), 4);
        assert_eq!(tracer.trace_level(), 2);
        assert_eq!(tracer.flags(), TraceFlags::WHITTED);
    }
}
