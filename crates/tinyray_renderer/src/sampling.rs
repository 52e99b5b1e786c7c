//! Random sampling helpers for the path tracer.
//!
//! Every pixel owns its own generator, seeded from the render seed and the
//! pixel coordinate, so parallel workers never share RNG state and a fixed
//! seed reproduces a frame bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::f32::consts::PI;
use tinyray_core::Color;
use tinyray_math::Vec3;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Largest channel of a colour; the roulette survival probability.
#[inline]
pub fn max_component(colour: Color) -> f32 {
    colour.max_element()
}

/// Independent generator for one pixel.
pub fn pixel_rng(seed: u64, row: u32, column: u32) -> StdRng {
    let coordinate = ((row as u64) << 32) | column as u64;
    StdRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ coordinate)
}

/// Cosine-weighted direction in the hemisphere around `normal`.
pub fn sample_diffuse(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let phi = 2.0 * PI * gen_f32(rng);
    let xi = gen_f32(rng);
    let radius = xi.sqrt();

    // Orthonormal basis {u, v, normal}
    let helper = if normal.x.abs() > 0.1 { Vec3::Y } else { Vec3::X };
    let u = helper.cross(normal).normalize();
    let v = normal.cross(u);

    (u * phi.cos() * radius + v * phi.sin() * radius + normal * (1.0 - xi).sqrt()).normalize()
}
