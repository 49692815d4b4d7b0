//! Plugin assembly and frame ordering.
//!
//! Per frame:
//! 1. `FixedUpdate` / `SimSet::Step`: integrate + collide at the configured tick rate
//! 2. `Update` / `SimSet::Input`: key presses and window size (may respawn)
//! 3. `Update` / `SimSet::Present`: sprites and timer text follow the field
use bevy::prelude::*;

use crate::auto_close::AutoClosePlugin;
use crate::config::SaverConfig;
use crate::input::{saver_controls, track_window_size, KeyBindings};
use crate::render::DonutRenderPlugin;
use crate::sim::{body_size, Arena, CountLimits, DonutField, SpawnParams};
use crate::sprite::SpriteSource;
use crate::timer::{ElapsedTimer, ElapsedTimerPlugin};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SimSet {
    Input,
    Step,
    Present,
}

/// Latest tick results, for logging and tests.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SimStats {
    pub ticks: u64,
    pub contacts: usize,
}

/// Config sources and warnings gathered in `main` before logging is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub sources: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Everything except windowing. Expects `SaverConfig` and `SpriteSource` resources.
pub struct SaverPlugin;

impl Plugin for SaverPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (SimSet::Input, SimSet::Present.after(SimSet::Input)))
            .init_resource::<KeyBindings>()
            .init_resource::<SimStats>()
            .init_resource::<ConfigDiagnostics>()
            .add_plugins((DonutFieldPlugin, DonutRenderPlugin, ElapsedTimerPlugin, AutoClosePlugin))
            .add_systems(Startup, report_config)
            .add_systems(
                Update,
                (saver_controls, track_window_size).chain().in_set(SimSet::Input),
            );
        #[cfg(feature = "debug")]
        app.add_plugins(crate::debug::SimStatsLogPlugin);
    }
}

/// Field construction and the fixed-rate step. Usable headless.
pub struct DonutFieldPlugin;

impl Plugin for DonutFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimStats>()
            .add_systems(PreStartup, (init_field, init_timer, configure_tick_rate))
            .add_systems(FixedUpdate, step_field.in_set(SimSet::Step));
    }
}

/// Build the initial field at the configured window size. The first real
/// window layout replaces it.
pub fn field_from_config(cfg: &SaverConfig, body: Vec2) -> DonutField {
    let arena = Arena::new(Vec2::new(cfg.window.width, cfg.window.height), body);
    let limits = CountLimits {
        min: cfg.donuts.min,
        max: cfg.donuts.max,
    };
    DonutField::new(
        arena,
        cfg.donuts.initial,
        limits,
        SpawnParams::from(&cfg.motion),
        DonutField::rng_from_seed(cfg.seed),
    )
}

fn init_field(mut commands: Commands, cfg: Res<SaverConfig>, source: Res<SpriteSource>) {
    let body = body_size(source.pixel_size(), source.scale);
    let field = field_from_config(&cfg, body);
    info!(
        count = field.count(),
        body_w = body.x,
        body_h = body.y,
        seeded = cfg.seed.is_some(),
        "donut field ready"
    );
    commands.insert_resource(field);
}

fn init_timer(mut commands: Commands, cfg: Res<SaverConfig>) {
    if let Some(timer) = ElapsedTimer::from_config(&cfg.timer) {
        commands.insert_resource(timer);
    }
}

fn configure_tick_rate(cfg: Res<SaverConfig>, mut fixed: ResMut<Time<Fixed>>) {
    fixed.set_timestep_hz(cfg.tick_hz());
}

fn step_field(mut field: ResMut<DonutField>, mut stats: ResMut<SimStats>) {
    stats.contacts = field.tick();
    stats.ticks = field.ticks();
}

fn report_config(diag: Res<ConfigDiagnostics>) {
    if diag.sources.is_empty() {
        info!("no config file found; using built-in defaults");
    } else {
        info!(sources = ?diag.sources, "config loaded");
    }
    for e in &diag.errors {
        warn!("config: {e}");
    }
    for w in &diag.warnings {
        warn!("config: {w}");
    }
}
