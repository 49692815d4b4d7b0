use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::collision::resolve_collisions;
use super::donut::{Arena, Donut};
use super::motion::advance_all;
use super::spawn::{spawn_donuts, SpawnParams};

/// Inclusive bounds on how many donuts may be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for CountLimits {
    fn default() -> Self {
        Self { min: 1, max: 50 }
    }
}

impl CountLimits {
    pub fn clamp(&self, count: usize) -> usize {
        count.max(self.min).min(self.max.max(self.min))
    }
}

/// Owns the live donuts and decides when to respawn them.
///
/// Count changes and resizes never patch the existing collection: a fresh set
/// is spawned and swapped in, and `generation` is bumped so the renderer can
/// rebuild its sprites.
#[derive(Resource)]
pub struct DonutField {
    donuts: Vec<Donut>,
    arena: Arena,
    count: usize,
    limits: CountLimits,
    params: SpawnParams,
    rng: StdRng,
    generation: u64,
    ticks: u64,
}

impl DonutField {
    pub fn new(
        arena: Arena,
        initial_count: usize,
        limits: CountLimits,
        params: SpawnParams,
        rng: StdRng,
    ) -> Self {
        let mut field = Self {
            donuts: Vec::new(),
            arena,
            count: limits.clamp(initial_count),
            limits,
            params,
            rng,
            generation: 0,
            ticks: 0,
        };
        field.respawn();
        field
    }

    /// Seeded when `seed` is set, otherwise entropy-backed.
    pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
        match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }

    pub fn donuts(&self) -> &[Donut] {
        &self.donuts
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn limits(&self) -> CountLimits {
        self.limits
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One more donut, if below the maximum. Respawns everything.
    pub fn increase(&mut self) -> bool {
        if self.count >= self.limits.max {
            return false;
        }
        self.count += 1;
        self.respawn();
        true
    }

    /// One fewer donut, if above the minimum. Respawns everything.
    pub fn decrease(&mut self) -> bool {
        if self.count <= self.limits.min {
            return false;
        }
        self.count -= 1;
        self.respawn();
        true
    }

    /// Adopt a new screen size. Only respawns when the size actually changed.
    pub fn resize(&mut self, screen: Vec2) -> bool {
        if self.arena.screen == screen {
            return false;
        }
        self.arena.screen = screen;
        self.respawn();
        true
    }

    pub fn respawn(&mut self) {
        let fresh = spawn_donuts(&self.arena, self.count, &self.params, &mut self.rng);
        self.donuts = fresh;
        self.generation += 1;
    }

    /// Integrate every donut, then resolve collisions. Returns the contact count.
    pub fn tick(&mut self) -> usize {
        advance_all(&mut self.donuts, &self.arena);
        self.ticks += 1;
        resolve_collisions(&mut self.donuts, self.arena.radius())
    }
}
