//! Render settings, loadable from a JSON file.
//!
//! ```json
//! {
//!   "width": 640,
//!   "height": 480,
//!   "mode": "path",
//!   "samplesPerPixel": 256,
//!   "seed": 7,
//!   "flags": ["gloss"],
//!   "scene": "cornell"
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use crate::bucket::DEFAULT_BUCKET_SIZE;
use crate::path_tracer::DEFAULT_SAMPLES_PER_PIXEL;
use crate::ray_tracer::DEFAULT_TRACE_LEVEL;
use crate::TraceFlags;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown trace flag: {0}")]
    UnknownFlag(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Which tracer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Deterministic recursive ray tracer
    Ray,
    /// Monte Carlo path tracer
    Path,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ray => "ray",
            Self::Path => "path",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub mode: RenderMode,
    /// Recursion budget of the ray tracer
    pub trace_level: u32,
    pub samples_per_pixel: u32,
    pub seed: u64,
    /// Flag names; `None` picks the mode's default set
    pub flags: Option<Vec<String>>,
    /// Preset scene name
    pub scene: String,
    pub output: PathBuf,
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            mode: RenderMode::Ray,
            trace_level: DEFAULT_TRACE_LEVEL,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            seed: 0,
            flags: None,
            scene: "default".to_string(),
            output: PathBuf::from("output.png"),
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderSettings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no tracer can run with.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.mode == RenderMode::Path && self.samples_per_pixel == 0 {
            return Err(SettingsError::Invalid(
                "path tracing needs at least one sample per pixel".to_string(),
            ));
        }
        if self.bucket_size == 0 {
            return Err(SettingsError::Invalid("bucket size must be non-zero".to_string()));
        }
        self.trace_flags().map(|_| ())
    }

    /// Resolve the flag names, falling back to the mode's defaults.
    pub fn trace_flags(&self) -> SettingsResult<TraceFlags> {
        let Some(names) = &self.flags else {
            return Ok(match self.mode {
                RenderMode::Ray => TraceFlags::WHITTED,
                RenderMode::Path => TraceFlags::empty(),
            });
        };

        names.iter().try_fold(TraceFlags::empty(), |flags, name| {
            TraceFlags::parse_name(name)
                .map(|flag| flags | flag)
                .ok_or_else(|| SettingsError::UnknownFlag(name.clone()))
        })
    }

    /// Output width over height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}
