//! Draws the donut field with Bevy sprites.
//!
//! Simulation space has its origin at the top-left with y pointing down; the
//! 2D camera's world space is centered with y up. `donut_transform` is the only
//! place that converts between the two.

use bevy::prelude::*;

use crate::app::SimSet;
use crate::sim::{Arena, Donut, DonutField};
use crate::sprite::{register_donut_texture, DonutTexture, SpriteSource};

pub struct DonutRenderPlugin;

impl Plugin for DonutRenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_camera, register_donut_texture))
            .add_systems(
                Update,
                (rebuild_donut_sprites, sync_donut_transforms)
                    .chain()
                    .in_set(SimSet::Present),
            );
    }
}

/// Marks the sprite drawing the donut at `index` in the field.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonutSprite {
    pub index: usize,
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn screen_to_world(p: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(p.x - screen.x * 0.5, screen.y * 0.5 - p.y)
}

/// Sprite transform for one donut: centered on its body, scaled uniformly,
/// rotated about its own center. Later indices draw on top.
pub fn donut_transform(donut: &Donut, index: usize, arena: &Arena, scale: f32) -> Transform {
    let center = donut.position + arena.body * 0.5;
    let world = screen_to_world(center, arena.screen);
    Transform {
        translation: world.extend(index as f32 * 0.001),
        // Screen y is flipped, so clockwise on screen is negative about +z.
        rotation: Quat::from_rotation_z(-donut.rotation),
        scale: Vec3::new(scale, scale, 1.0),
    }
}

/// Replace every sprite whenever the field respawned.
fn rebuild_donut_sprites(
    mut commands: Commands,
    field: Res<DonutField>,
    texture: Option<Res<DonutTexture>>,
    source: Res<SpriteSource>,
    sprites: Query<Entity, With<DonutSprite>>,
    mut built_generation: Local<Option<u64>>,
) {
    let Some(texture) = texture else {
        return;
    };
    if *built_generation == Some(field.generation()) {
        return;
    }
    for entity in &sprites {
        commands.entity(entity).despawn();
    }
    let arena = field.arena();
    for (index, donut) in field.donuts().iter().enumerate() {
        commands.spawn((
            Sprite::from_image(texture.0.clone()),
            donut_transform(donut, index, arena, source.scale),
            DonutSprite { index },
        ));
    }
    *built_generation = Some(field.generation());
    debug!(
        count = field.count(),
        generation = field.generation(),
        "donut sprites rebuilt"
    );
}

fn sync_donut_transforms(
    field: Res<DonutField>,
    source: Res<SpriteSource>,
    mut sprites: Query<(&DonutSprite, &mut Transform)>,
) {
    let arena = field.arena();
    for (sprite, mut transform) in &mut sprites {
        if let Some(donut) = field.donuts().get(sprite.index) {
            *transform = donut_transform(donut, sprite.index, arena, source.scale);
        }
    }
}
