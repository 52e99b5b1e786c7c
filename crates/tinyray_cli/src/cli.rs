use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use tinyray_renderer::{RenderMode, RenderSettings};

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Tracer selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Ray,
    Path,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ray => RenderMode::Ray,
            Mode::Path => RenderMode::Path,
        }
    }
}

/// Command line arguments. Anything given here overrides the settings file.
#[derive(Debug, Parser)]
#[command(name = "tinyray")]
#[command(about = "Render a TinyRay scene with the ray tracer or the path tracer")]
pub struct Args {
    /// JSON settings file
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Tracer to run
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Recursion depth of the ray tracer
    #[arg(long)]
    pub trace_level: Option<u32>,

    /// Samples per pixel for the path tracer
    #[arg(long = "spp")]
    pub samples_per_pixel: Option<u32>,

    /// Seed for the path tracer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trace flags, e.g. `--flags shadow,reflection`
    #[arg(long, value_delimiter = ',')]
    pub flags: Option<Vec<String>>,

    /// Preset scene name
    #[arg(long)]
    pub scene: Option<String>,

    /// Output image path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the preset scene names and exit
    #[arg(long)]
    pub list_scenes: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Overlay the arguments that were given onto `settings`.
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode.into();
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(level) = self.trace_level {
            settings.trace_level = level;
        }
        if let Some(spp) = self.samples_per_pixel {
            settings.samples_per_pixel = spp;
        }
        if let Some(seed) = self.seed {
            settings.seed = seed;
        }
        if let Some(flags) = &self.flags {
            settings.flags = Some(flags.clone());
        }
        if let Some(scene) = &self.scene {
            settings.scene = scene.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
    }
}
