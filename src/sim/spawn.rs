use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::donut::{Arena, Donut};
use crate::config::{MotionConfig, SpawnRange};

/// Ranges the spawner samples from. Magnitudes only; signs are applied separately.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnParams {
    /// Per-axis speed magnitude, pixels per tick.
    pub speed: SpawnRange<f32>,
    /// Spin magnitude, radians per tick.
    pub spin: SpawnRange<f32>,
    /// Spawn disk radius as a fraction of the smaller screen dimension.
    pub radius_factor: f32,
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self::from(&MotionConfig::default())
    }
}

impl From<&MotionConfig> for SpawnParams {
    fn from(m: &MotionConfig) -> Self {
        Self {
            speed: m.speed.clone(),
            spin: m.spin.clone(),
            radius_factor: m.spawn_radius_factor,
        }
    }
}

pub fn spawn_radius(arena: &Arena, factor: f32) -> f32 {
    arena.screen.x.min(arena.screen.y) * factor
}

/// Scatter `count` donuts inside a disk around the screen center.
///
/// Even indices spin clockwise, odd indices counter-clockwise.
pub fn spawn_donuts<R: Rng + ?Sized>(
    arena: &Arena,
    count: usize,
    params: &SpawnParams,
    rng: &mut R,
) -> Vec<Donut> {
    let center = arena.center();
    let radius = spawn_radius(arena, params.radius_factor);
    let half_body = arena.body * 0.5;

    (0..count)
        .map(|i| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = if radius > 0.0 {
                rng.gen_range(0.0..radius)
            } else {
                0.0
            };
            let raw = center + Vec2::from_angle(angle) * distance - half_body;
            let position = arena.clamp_position(raw);

            let mut velocity = Vec2::new(sample(&params.speed, rng), sample(&params.speed, rng));
            if rng.gen_bool(0.5) {
                velocity.x = -velocity.x;
            }
            if rng.gen_bool(0.5) {
                velocity.y = -velocity.y;
            }

            let mut spin = sample(&params.spin, rng);
            if i % 2 == 1 {
                spin = -spin;
            }

            Donut {
                position,
                velocity,
                rotation: rng.gen_range(0.0..TAU),
                spin,
            }
        })
        .collect()
}

// Inclusive, tolerant of an inverted range from a hand-edited config.
fn sample<R: Rng + ?Sized>(range: &SpawnRange<f32>, rng: &mut R) -> f32 {
    let (lo, hi) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    rng.gen_range(lo..=hi)
}
