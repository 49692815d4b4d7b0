use bevy::prelude::*;

use donut_saver::sprite::load_sprite;
use donut_saver::timer::ElapsedTimer;
use donut_saver::{DonutField, DonutFieldPlugin, SaverConfig, SimStats, SpriteSource};

fn build_minimal_app(cfg: SaverConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    let image = load_sprite(None).expect("embedded sprite");
    app.insert_resource(SpriteSource {
        image,
        scale: cfg.donuts.scale,
    });
    app.insert_resource(cfg);
    app.add_plugins(DonutFieldPlugin);
    app
}

#[test]
fn field_built_from_config_and_sprite() {
    let mut cfg = SaverConfig::default();
    cfg.seed = Some(4);
    let mut app = build_minimal_app(cfg);
    app.update();

    let field = app.world().resource::<DonutField>();
    assert_eq!(field.count(), 6);
    // 128px embedded donut at 0.5 scale.
    assert_eq!(field.arena().body, Vec2::splat(64.0));
    assert_eq!(field.arena().screen, Vec2::new(800.0, 600.0));
    assert!(app.world().contains_resource::<ElapsedTimer>());
}

#[test]
fn fixed_schedule_steps_the_field() {
    let mut cfg = SaverConfig::default();
    cfg.seed = Some(4);
    let mut app = build_minimal_app(cfg);
    app.update();
    let ticks_before = app.world().resource::<DonutField>().ticks();

    for _ in 0..30 {
        app.world_mut().run_schedule(FixedUpdate);
    }

    let field = app.world().resource::<DonutField>();
    assert_eq!(field.ticks(), ticks_before + 30);
    assert_eq!(app.world().resource::<SimStats>().ticks, field.ticks());
    for d in field.donuts() {
        assert!(d.is_finite());
    }
}

#[test]
fn tick_rate_follows_config() {
    let mut cfg = SaverConfig::default();
    cfg.motion.tick_hz = 120.0;
    let mut app = build_minimal_app(cfg);
    app.update();
    let step = app.world().resource::<Time<Fixed>>().timestep();
    assert!((step.as_secs_f64() - 1.0 / 120.0).abs() < 1e-9);
}

#[test]
fn timer_disabled_leaves_no_resource() {
    let mut cfg = SaverConfig::default();
    cfg.timer.enabled = false;
    let mut app = build_minimal_app(cfg);
    app.update();
    assert!(!app.world().contains_resource::<ElapsedTimer>());
}

#[test]
fn out_of_range_initial_count_is_clamped() {
    let mut cfg = SaverConfig::default();
    cfg.donuts.initial = 500;
    let mut app = build_minimal_app(cfg);
    app.update();
    assert_eq!(app.world().resource::<DonutField>().count(), 50);
}
