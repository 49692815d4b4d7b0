use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::window::{CursorOptions, MonitorSelection, WindowMode};
use clap::Parser;

use donut_saver::cli::Args;
use donut_saver::sprite::load_sprite;
use donut_saver::{ConfigDiagnostics, SaverConfig, SaverPlugin, SpriteSource};

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut cfg, sources, errors) = SaverConfig::load_layered(args.config_paths());
    args.apply(&mut cfg);
    let warnings = cfg.validate();

    // No fallback artwork: a sprite that fails to decode ends the process here.
    let image = load_sprite(cfg.donuts.sprite.as_deref().map(Path::new))
        .context("cannot start without a donut sprite")?;
    let sprite = SpriteSource {
        image,
        scale: cfg.donuts.scale,
    };

    let mode = if cfg.window.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                mode,
                cursor_options: CursorOptions {
                    visible: !cfg.window.fullscreen,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ConfigDiagnostics {
            sources,
            errors,
            warnings,
        })
        .insert_resource(sprite)
        .insert_resource(cfg)
        .add_plugins(SaverPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("screensaver exited with code {code}"),
    }
}
