//! Donut simulation core.
//!
//! Pure data + functions, no rendering or windowing. Everything here is driven
//! in discrete ticks (one tick per fixed step) and is deterministic for a given
//! random source.
//!
//! - `donut`: per-body state and arena geometry
//! - `spawn`: randomized initial conditions around the screen center
//! - `motion`: per-tick integration and edge bounce
//! - `collision`: pairwise equal-mass elastic collision
//! - `field`: the controller resource that owns the collection

pub mod collision;
pub mod donut;
pub mod field;
pub mod motion;
pub mod spawn;

pub use collision::{overlapping, resolve_collisions, resolve_pair};
pub use donut::{body_size, Arena, Donut};
pub use field::{CountLimits, DonutField};
pub use motion::{advance, advance_all};
pub use spawn::{spawn_donuts, spawn_radius, SpawnParams};
