//! Binary entrypoint for the vitrine demo.
//!
//! Runs a headless simulation of the background slider: a scripted drag, a
//! release snap and a programmatic advance, ticked at a fixed frame rate,
//! with slot swaps and background changes logged.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use tracing::{Level, debug, info, trace, warn};
use tracing_subscriber::{EnvFilter, fmt};

use vitrine::backgrounds::Backgrounds;
use vitrine::carousel;
use vitrine::config::Configuration;
use vitrine::error::Error;
use vitrine::events::DragSample;
use vitrine::slider::BackgroundSlider;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Headless slider and layout demo")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Number of frames to simulate at 60 fps
    #[arg(long, default_value_t = 240)]
    frames: u32,

    /// Background asset URL (repeatable); defaults to three placeholders
    #[arg(long = "item", value_name = "URL")]
    items: Vec<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter =
        EnvFilter::from_default_env().add_directive(format!("vitrine={level}").parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = if cli.config.exists() {
        Configuration::from_yaml_file(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
            .validated()
            .context("validating configuration")?
    } else {
        info!(path = %cli.config.display(), "config file not found; using defaults");
        Configuration::default()
    };

    let mut items = if cli.items.is_empty() {
        vec![
            "assets/backgrounds/01.jpg".to_owned(),
            "assets/backgrounds/02.jpg".to_owned(),
            "assets/backgrounds/03.jpg".to_owned(),
        ]
    } else {
        cli.items.clone()
    };
    if let Some(seed) = cfg.startup_shuffle_seed {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        items.shuffle(&mut rng);
    }
    let items = carousel::pad_items(items)?;
    info!(count = items.len(), "item list prepared");

    let mut slider = BackgroundSlider::new(items.len(), cfg.slider.clone())?;
    let mut backgrounds = Backgrounds::new(move |index: usize| {
        items
            .get(index)
            .cloned()
            .ok_or_else(|| Error::Preload {
                index,
                reason: "index out of range".to_owned(),
            })
    });

    let dt = 1.0 / 60.0;
    for frame in 0..cli.frames {
        let now = f64::from(frame) * dt;

        // Scripted input: drag right for a third of a second, release, then
        // advance programmatically at the halfway mark.
        if frame < 20 {
            slider.on_drag(DragSample {
                delta_x: 140.0,
                velocity_x: 1.2,
            });
        } else if frame == 20 {
            slider.on_drag_end(now);
        } else if frame == cli.frames / 2 {
            slider.next(now);
        }

        let out = slider.tick(now);
        trace!(
            frame,
            index = slider.virtual_index(),
            x = ?out.slot_x_percent,
            "ticked"
        );
        if out.slot_changed.iter().any(|c| *c) {
            debug!(frame, items = ?out.slot_items, "slot contents swapped");
        }
        match backgrounds.activate(out.active_index) {
            Ok(()) => {}
            Err(err) => warn!(%err, "background preload failed"),
        }
    }

    info!(
        final_index = slider.virtual_index(),
        background = backgrounds.active().map(String::as_str).unwrap_or("-"),
        "simulation complete"
    );
    Ok(())
}
