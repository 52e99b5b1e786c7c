//! TinyRay Renderer - CPU tracers for `tinyray_core` scenes.
//!
//! Two renderers share the framebuffer, bucket scheduler and view plane:
//!
//! - [`RayTracer`]: deterministic recursive tracer with ambient, Phong,
//!   shadow, reflection and refraction terms gated by [`TraceFlags`].
//! - [`PathTracer`]: Monte Carlo path tracer with Russian roulette.
//!
//! Both spread buckets over the rayon pool. Each renders at most once until
//! its render count is reset.

mod bucket;
mod flags;
mod framebuffer;
mod path_tracer;
mod ray_tracer;
mod sampling;
mod settings;
mod shading;
mod view;

pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use flags::TraceFlags;
pub use framebuffer::{clamp_01, color_to_rgba, Framebuffer, FramebufferError};
pub use path_tracer::{PathTracer, DEFAULT_SAMPLES_PER_PIXEL, MAX_PATH_DEPTH, ROULETTE_DEPTH};
pub use ray_tracer::{RayTracer, DEFAULT_TRACE_LEVEL, REFRACTION_OFFSET, SHADOW_FACTOR, SURFACE_OFFSET};
pub use sampling::{pixel_rng, sample_diffuse};
pub use settings::{RenderMode, RenderSettings, SettingsError, SettingsResult};
pub use shading::{calculate_lighting, checker, CHECKER_DARK};
pub use view::ViewPlane;

/// Re-export scene types from tinyray_core
pub use tinyray_core::{Color, Scene};

/// Outcome of a `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// A full frame was written to the framebuffer.
    Rendered,
    /// The tracer had already rendered; the framebuffer is untouched.
    Skipped,
}
