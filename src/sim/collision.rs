//! Pairwise circle-vs-circle collision for equal-mass, equal-radius donuts.
//!
//! Pairs are visited once per tick in ascending index order and resolved in
//! place, so a donut pushed by an earlier pair is re-tested with its updated
//! state against later neighbours in the same pass. Dense clusters can stay
//! slightly overlapped for a tick; that is accepted.

use bevy::prelude::*;

use super::donut::Donut;

/// Two circles of the same `radius` overlap when their centers are closer than `2 * radius`.
pub fn overlapping(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius * 2.0
}

/// Separate an overlapping pair and exchange the normal component of their velocities.
///
/// Returns `true` when velocities changed; an already separating pair only gets
/// the positional push.
pub fn resolve_pair(a: &mut Donut, b: &mut Donut, radius: f32) -> bool {
    let delta = b.center(radius) - a.center(radius);
    let mut distance = delta.length();
    // Coincident centers: pick +x as the separation axis.
    let normal = if distance == 0.0 {
        distance = 1.0;
        Vec2::X
    } else {
        delta / distance
    };

    let overlap = radius * 2.0 - distance;
    let push = normal * (overlap * 0.5);
    a.position -= push;
    b.position += push;

    let approach = (b.velocity - a.velocity).dot(normal);
    if approach > 0.0 {
        return false;
    }
    // Equal masses: the impulse is the whole normal relative velocity.
    let impulse = normal * approach;
    a.velocity += impulse;
    b.velocity -= impulse;
    true
}

/// Resolve every overlapping pair once. Returns how many pairs overlapped.
pub fn resolve_collisions(donuts: &mut [Donut], radius: f32) -> usize {
    let mut contacts = 0;
    for i in 0..donuts.len() {
        for j in (i + 1)..donuts.len() {
            let (head, tail) = donuts.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if overlapping(a.center(radius), b.center(radius), radius) {
                resolve_pair(a, b, radius);
                contacts += 1;
            }
        }
    }
    contacts
}
