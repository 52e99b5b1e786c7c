//! Switches for the physical effects a tracer evaluates.

use bitflags::bitflags;

bitflags! {
    /// Effects enabled for a render.
    ///
    /// Held by value in each tracer and copied once per render, so workers
    /// never observe a change mid-frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TraceFlags: u32 {
        /// Material ambient term.
        const AMBIENT = 1;
        /// Lambertian diffuse plus Phong highlight from every light.
        const DIFFUSE_AND_SPEC = 1 << 1;
        /// Darken surfaces occluded from the first light.
        const SHADOW = 1 << 2;
        /// Mirror bounce off non-plane primitives.
        const REFLECTION = 1 << 3;
        /// Transmitted bounce through non-plane primitives.
        const REFRACTION = 1 << 4;
        /// Path tracer only: spheres and boxes reflect instead of scattering.
        const GLOSSY = 1 << 5;
    }
}

impl TraceFlags {
    /// Everything the deterministic tracer understands.
    pub const WHITTED: TraceFlags = TraceFlags::AMBIENT
        .union(TraceFlags::DIFFUSE_AND_SPEC)
        .union(TraceFlags::SHADOW)
        .union(TraceFlags::REFLECTION)
        .union(TraceFlags::REFRACTION);

    /// Parse a flag from its name, case-insensitively.
    ///
    /// Accepts the constant names (`diffuse_and_spec`) and a few short forms.
    pub fn parse_name(name: &str) -> Option<TraceFlags> {
        let upper = name.trim().to_ascii_uppercase().replace('-', "_");
        match upper.as_str() {
            "DIFFUSE" | "PHONG" => Some(TraceFlags::DIFFUSE_AND_SPEC),
            "SHADOWS" => Some(TraceFlags::SHADOW),
            "GLOSS" => Some(TraceFlags::GLOSSY),
            "WHITTED" => Some(TraceFlags::WHITTED),
            other => TraceFlags::from_name(other),
        }
    }
}
