//! `tinyray` - render a preset scene to an image file.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;
use tinyray_core::presets;
use tinyray_renderer::{Framebuffer, PathTracer, RayTracer, RenderMode, RenderSettings};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .format_timestamp_millis()
        .init();

    if args.list_scenes {
        for name in presets::PRESET_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let mut settings = match &args.settings {
        Some(path) => RenderSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RenderSettings::default(),
    };
    args.apply(&mut settings);
    settings.validate().context("Invalid render settings")?;

    let scene = presets::by_name(&settings.scene, settings.aspect()).ok_or_else(|| {
        anyhow!(
            "Unknown scene '{}', expected one of: {}",
            settings.scene,
            presets::PRESET_NAMES.join(", ")
        )
    })?;

    info!(
        "Rendering '{}' with the {} tracer at {}x{}",
        settings.scene,
        settings.mode.as_str(),
        settings.width,
        settings.height
    );
    let start = Instant::now();

    match settings.mode {
        RenderMode::Ray => {
            let mut tracer = RayTracer::from_settings(&settings)?;
            tracer.render(&scene);
            save(tracer.framebuffer(), &settings)?;
        }
        RenderMode::Path => {
            let mut tracer = PathTracer::from_settings(&settings)?;
            tracer.render(&scene);
            save(tracer.framebuffer(), &settings)?;
        }
    }

    info!("Done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn save(framebuffer: &Framebuffer, settings: &RenderSettings) -> Result<()> {
    framebuffer
        .save(&settings.output)
        .with_context(|| format!("Failed to write {}", settings.output.display()))
}
