//! Surface colour terms.

use tinyray_math::Vec3;

/// Color type alias (linear RGB, unclamped while accumulating)
pub type Color = Vec3;

/// Phong-style material with an emissive term for the path tracer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Constant term added regardless of lights
    pub ambient: Color,

    /// Lambertian reflectance; also the path tracer's albedo
    pub diffuse: Color,

    /// Phong highlight colour
    pub specular: Color,

    /// Light emitted by the surface
    pub emissive: Color,

    /// Phong exponent
    pub spec_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::ZERO,
            emissive: Color::ZERO,
            spec_power: 1.0,
        }
    }
}

impl Material {
    /// A material with the given diffuse colour and a tenth of it as ambient.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            ambient: diffuse * 0.1,
            diffuse,
            ..Default::default()
        }
    }

    /// Set the ambient colour.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the specular colour and exponent.
    pub fn with_specular(mut self, specular: Color, spec_power: f32) -> Self {
        self.specular = specular;
        self.spec_power = spec_power;
        self
    }

    /// Set the emitted colour.
    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emissive.length_squared() > 0.0
    }
}
