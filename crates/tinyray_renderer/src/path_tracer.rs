//! Monte Carlo path tracer.
//!
//! Each pixel averages `samples_per_pixel` independent paths through its
//! centre. A path gathers emission at every hit and continues along a
//! cosine-weighted diffuse direction, or a mirror direction for glossy kinds
//! when [`TraceFlags::GLOSSY`] is set. Past [`ROULETTE_DEPTH`] bounces, paths
//! survive with probability equal to the largest albedo channel and are
//! reweighted by its inverse, which keeps the estimate unbiased.

use crate::bucket::{render_buckets, DEFAULT_BUCKET_SIZE};
use crate::sampling::{gen_f32, max_component, pixel_rng, sample_diffuse};
use crate::settings::{RenderSettings, SettingsResult};
use crate::view::ViewPlane;
use crate::{Framebuffer, RenderStatus, TraceFlags};
use rand::RngCore;
use std::time::Instant;
use tinyray_core::{Color, Scene};
use tinyray_math::{reflect, Ray};

/// Default number of samples per pixel.
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 1000;

/// Bounces taken unconditionally before Russian roulette starts.
pub const ROULETTE_DEPTH: u32 = 5;

/// Hard stop for paths whose albedo never lets roulette terminate them.
pub const MAX_PATH_DEPTH: u32 = 512;

const DIFFUSE_OFFSET: f32 = 1e-4;
const GLOSSY_OFFSET: f32 = 1e-3;

/// Path tracer owning its framebuffer.
pub struct PathTracer {
    framebuffer: Framebuffer,
    samples_per_pixel: u32,
    flags: TraceFlags,
    seed: u64,
    render_count: u32,
    bucket_size: u32,
}

impl PathTracer {
    /// Create a tracer for a `width` x `height` output with diffuse-only paths.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            flags: TraceFlags::empty(),
            seed: 0,
            render_count: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }

    /// Create a tracer from validated settings.
    pub fn from_settings(settings: &RenderSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings.width, settings.height)
            .with_flags(settings.trace_flags()?)
            .with_samples(settings.samples_per_pixel)
            .with_seed(settings.seed)
            .with_bucket_size(settings.bucket_size))
    }

    /// Set the number of samples per pixel (at least one).
    pub fn with_samples(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel.max(1);
        self
    }

    /// Set the seed all per-pixel generators derive from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the effect flags; only [`TraceFlags::GLOSSY`] changes path behaviour.
    pub fn with_flags(mut self, flags: TraceFlags) -> Self {
        self.flags = flags;
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

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of completed full-frame renders since the last reset.
    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    /// Allow the next [`PathTracer::render`] call to run again.
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
            log::warn!("Path trace skipped: frame already rendered, reset the render count first");
            return RenderStatus::Skipped;
        }

        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let view = ViewPlane::new(scene, width, height);

        log::info!(
            "Path trace start: {}x{} @ {} spp, seed {}, flags {:?}",
            width,
            height,
            self.samples_per_pixel,
            self.seed,
            self.flags
        );
        let start = Instant::now();

        let results = render_buckets(width, height, self.bucket_size, |row, column| {
            let mut rng = pixel_rng(self.seed, row, column);
            let ray = view.primary_ray(row, column);
            self.render_pixel(scene, &ray, &mut rng)
        });

        for result in &results {
            self.framebuffer.write_bucket(result);
        }

        log::info!("Path tracing complete in {:?}", start.elapsed());
        self.render_count += 1;
        RenderStatus::Rendered
    }

    /// Average of `samples_per_pixel` radiance estimates along one ray.
    ///
    /// Every sample reuses the same primary ray; there is no sub-pixel jitter.
    pub fn render_pixel(&self, scene: &Scene, ray: &Ray, rng: &mut dyn RngCore) -> Color {
        let mut pixel_color = Color::ZERO;

        for _ in 0..self.samples_per_pixel {
            pixel_color += self.radiance(scene, ray, 0, rng);
        }

        pixel_color / self.samples_per_pixel as f32
    }

    /// One-sample radiance estimate along `ray`.
    ///
    /// `depth` counts the bounces already taken; a primary ray starts at 0.
    /// Rays that escape the scene carry no light.
    pub fn radiance(&self, scene: &Scene, ray: &Ray, depth: u32, rng: &mut dyn RngCore) -> Color {
        let Some(hit) = scene.intersect_by_ray(ray) else {
            return Color::ZERO;
        };

        let material = hit.material();
        let emittance = material.emissive;
        let mut albedo = material.diffuse;

        // Russian roulette
        let depth = depth + 1;
        if depth > ROULETTE_DEPTH {
            let survival = max_component(albedo);
            if depth > MAX_PATH_DEPTH || gen_f32(rng) >= survival {
                return emittance;
            }
            albedo /= survival;
        }

        let kind = hit.kind();
        let glossy = self.flags.contains(TraceFlags::GLOSSY);

        // Under the glossy flag only planes scatter and only spheres and
        // boxes mirror; any other kind carries no light.
        if glossy && !kind.is_glossy() && !kind.is_plane() {
            return Color::ZERO;
        }

        let next = if glossy && kind.is_glossy() {
            let mirrored = reflect(ray.direction(), hit.normal).normalize();
            Ray::new(hit.point + mirrored * GLOSSY_OFFSET, mirrored)
        } else {
            let scattered = sample_diffuse(hit.normal, rng);
            Ray::new(hit.point + scattered * DIFFUSE_OFFSET, scattered)
        };

        emittance + albedo * self.radiance(scene, &next, depth, rng)
    }
}
