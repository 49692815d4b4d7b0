use bevy::prelude::*;

/// One bouncing body. `position` is the top-left corner of its bounding box in
/// screen pixels (y grows downward); velocities and spin are per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Donut {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radians, accumulated without wrapping.
    pub rotation: f32,
    /// Radians per tick. Sign encodes direction.
    pub spin: f32,
}

impl Donut {
    pub fn center(&self, radius: f32) -> Vec2 {
        self.position + Vec2::splat(radius)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.rotation.is_finite()
            && self.spin.is_finite()
    }
}

/// Screen bounds plus the shared body size every donut uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub screen: Vec2,
    pub body: Vec2,
}

impl Arena {
    pub fn new(screen: Vec2, body: Vec2) -> Self {
        Self { screen, body }
    }

    /// Largest legal top-left corner.
    pub fn max_corner(&self) -> Vec2 {
        self.screen - self.body
    }

    pub fn center(&self) -> Vec2 {
        self.screen * 0.5
    }

    /// Bodies are treated as circles; width == height is assumed.
    pub fn radius(&self) -> f32 {
        self.body.x * 0.5
    }

    /// Snap a corner position into `[0, max_corner]` on both axes.
    ///
    /// Written with plain comparisons: on a screen smaller than the body the
    /// max corner goes negative and `f32::clamp` would panic.
    pub fn clamp_position(&self, p: Vec2) -> Vec2 {
        let max = self.max_corner();
        Vec2::new(clamp_axis(p.x, max.x), clamp_axis(p.y, max.y))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max_corner();
        p.x >= 0.0 && p.y >= 0.0 && p.x <= max.x && p.y <= max.y
    }
}

fn clamp_axis(v: f32, max: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > max {
        max
    } else {
        v
    }
}

/// Body size from the decoded sprite's pixel bounds and the configured scale.
pub fn body_size(pixels: UVec2, scale: f32) -> Vec2 {
    pixels.as_vec2() * scale
}
