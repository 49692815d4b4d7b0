use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use rand::{rngs::StdRng, SeedableRng};

use donut_saver::input::{saver_controls, track_window_size, KeyBindings};
use donut_saver::sim::{CountLimits, SpawnParams};
use donut_saver::{Arena, DonutField};

fn build_app(initial: usize, limits: CountLimits) -> App {
    let mut app = App::new();
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.init_resource::<KeyBindings>();
    app.insert_resource(DonutField::new(
        Arena::new(Vec2::new(800.0, 600.0), Vec2::splat(64.0)),
        initial,
        limits,
        SpawnParams::default(),
        StdRng::seed_from_u64(1),
    ));
    app.add_systems(Update, (saver_controls, track_window_size).chain());
    app
}

/// Press and release `key` around one frame so it reads as a single edge.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

fn field(app: &App) -> &DonutField {
    app.world().resource::<DonutField>()
}

fn exit_requested(app: &App) -> bool {
    !app.world().resource::<Events<AppExit>>().is_empty()
}

#[test]
fn plus_and_minus_change_count() {
    let mut app = build_app(6, CountLimits { min: 1, max: 50 });
    let generation = field(&app).generation();

    tap(&mut app, KeyCode::Equal);
    assert_eq!(field(&app).count(), 7);
    assert_eq!(field(&app).donuts().len(), 7);

    tap(&mut app, KeyCode::NumpadAdd);
    assert_eq!(field(&app).count(), 8);

    tap(&mut app, KeyCode::Minus);
    tap(&mut app, KeyCode::NumpadSubtract);
    assert_eq!(field(&app).count(), 6);
    assert_eq!(field(&app).generation(), generation + 4);
}

#[test]
fn holding_a_key_counts_once() {
    let mut app = build_app(6, CountLimits::default());
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Equal);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    // Still held, no new edge.
    app.update();
    app.update();
    assert_eq!(field(&app).count(), 7);
}

#[test]
fn limits_make_out_of_range_requests_noops() {
    let mut app = build_app(3, CountLimits { min: 3, max: 3 });
    let before = field(&app).donuts().to_vec();
    let generation = field(&app).generation();

    tap(&mut app, KeyCode::Equal);
    tap(&mut app, KeyCode::Minus);

    assert_eq!(field(&app).count(), 3);
    assert_eq!(field(&app).donuts(), before.as_slice());
    assert_eq!(field(&app).generation(), generation);
}

#[test]
fn escape_requests_exit() {
    let mut app = build_app(6, CountLimits::default());
    app.update();
    assert!(!exit_requested(&app));
    tap(&mut app, KeyCode::Escape);
    assert!(exit_requested(&app));
}

#[test]
fn custom_bindings_replace_defaults() {
    let mut app = build_app(6, CountLimits::default());
    app.insert_resource(KeyBindings {
        increase: vec![KeyCode::ArrowUp],
        decrease: vec![KeyCode::ArrowDown],
        exit: vec![KeyCode::KeyQ],
    });
    tap(&mut app, KeyCode::Equal);
    assert_eq!(field(&app).count(), 6);
    tap(&mut app, KeyCode::ArrowUp);
    assert_eq!(field(&app).count(), 7);
    tap(&mut app, KeyCode::KeyQ);
    assert!(exit_requested(&app));
}

#[test]
fn window_resize_respawns_at_current_count() {
    let mut app = build_app(6, CountLimits::default());
    let window = app
        .world_mut()
        .spawn((
            Window {
                resolution: WindowResolution::new(1280.0, 720.0),
                ..default()
            },
            PrimaryWindow,
        ))
        .id();
    let generation = field(&app).generation();

    app.update();
    assert_eq!(field(&app).arena().screen, Vec2::new(1280.0, 720.0));
    assert_eq!(field(&app).donuts().len(), 6);
    assert_eq!(field(&app).generation(), generation + 1);
    for d in field(&app).donuts() {
        assert!(field(&app).arena().contains(d.position));
    }

    // Same size again: nothing happens.
    app.update();
    assert_eq!(field(&app).generation(), generation + 1);

    app.world_mut()
        .entity_mut(window)
        .get_mut::<Window>()
        .expect("window")
        .resolution
        .set(640.0, 480.0);
    app.update();
    assert_eq!(field(&app).arena().screen, Vec2::new(640.0, 480.0));
    assert_eq!(field(&app).generation(), generation + 2);
}
