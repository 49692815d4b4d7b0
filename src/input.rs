use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::sim::DonutField;

/// Keys that drive the screensaver. Any key in a list triggers its action on press.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub increase: Vec<KeyCode>,
    pub decrease: Vec<KeyCode>,
    pub exit: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increase: vec![KeyCode::Equal, KeyCode::NumpadAdd],
            decrease: vec![KeyCode::Minus, KeyCode::NumpadSubtract],
            exit: vec![KeyCode::Escape],
        }
    }
}

pub fn saver_controls(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut field: ResMut<DonutField>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if keys.any_just_pressed(bindings.exit.iter().copied()) {
        info!("exit requested");
        ev_exit.write(AppExit::Success);
        return;
    }
    if keys.any_just_pressed(bindings.increase.iter().copied()) && field.increase() {
        info!(count = field.count(), "donut added");
    }
    if keys.any_just_pressed(bindings.decrease.iter().copied()) && field.decrease() {
        info!(count = field.count(), "donut removed");
    }
}

/// Follow the primary window's logical size; the field respawns when it changes.
pub fn track_window_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut field: ResMut<DonutField>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    // Minimized windows report 0x0 on some platforms.
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    if field.arena().screen != size && field.resize(size) {
        info!(width = size.x, height = size.y, "screen resized; donuts respawned");
    }
}
