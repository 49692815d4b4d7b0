use super::donut::{Arena, Donut};

/// Move and spin one donut by a single tick, then bounce it off the screen edges.
///
/// A bounce flips the velocity component and snaps the position onto the edge it
/// crossed; penetration depth is discarded. Axes are handled independently, so a
/// corner hit flips both.
pub fn advance(donut: &mut Donut, arena: &Arena) {
    donut.position += donut.velocity;
    donut.rotation += donut.spin;

    let max = arena.max_corner();
    if donut.position.x <= 0.0 || donut.position.x >= max.x {
        donut.velocity.x = -donut.velocity.x;
        donut.position.x = if donut.position.x <= 0.0 { 0.0 } else { max.x };
    }
    if donut.position.y <= 0.0 || donut.position.y >= max.y {
        donut.velocity.y = -donut.velocity.y;
        donut.position.y = if donut.position.y <= 0.0 { 0.0 } else { max.y };
    }
}

pub fn advance_all(donuts: &mut [Donut], arena: &Arena) {
    for donut in donuts.iter_mut() {
        advance(donut, arena);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    fn arena() -> Arena {
        Arena::new(Vec2::new(800.0, 600.0), Vec2::splat(64.0))
    }

    fn donut(position: Vec2, velocity: Vec2) -> Donut {
        Donut {
            position,
            velocity,
            rotation: 0.0,
            spin: 0.02,
        }
    }

    #[test]
    fn free_flight_moves_and_spins() {
        let mut d = donut(Vec2::new(100.0, 100.0), Vec2::new(3.0, -2.0));
        advance(&mut d, &arena());
        assert_eq!(d.position, Vec2::new(103.0, 98.0));
        assert_eq!(d.velocity, Vec2::new(3.0, -2.0));
        assert!((d.rotation - 0.02).abs() < 1e-6);
    }

    #[test]
    fn left_edge_flips_and_clamps() {
        let mut d = donut(Vec2::new(0.0, 100.0), Vec2::new(-2.0, 0.5));
        advance(&mut d, &arena());
        assert_eq!(d.position.x, 0.0);
        assert_eq!(d.velocity.x, 2.0);
        assert_eq!(d.velocity.y, 0.5);
    }

    #[test]
    fn right_edge_snaps_to_max_corner() {
        let mut d = donut(Vec2::new(734.0, 100.0), Vec2::new(4.0, 0.5));
        advance(&mut d, &arena());
        assert_eq!(d.position.x, 736.0);
        assert_eq!(d.velocity.x, -4.0);
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let mut d = donut(Vec2::new(735.0, 535.0), Vec2::new(3.0, 3.0));
        advance(&mut d, &arena());
        assert_eq!(d.position, Vec2::new(736.0, 536.0));
        assert_eq!(d.velocity, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn rotation_accumulates_without_wrapping() {
        let mut d = donut(Vec2::new(300.0, 300.0), Vec2::ZERO);
        d.spin = 1.0;
        for _ in 0..10 {
            advance(&mut d, &arena());
        }
        assert!((d.rotation - 10.0).abs() < 1e-5);
    }

    #[test]
    fn stays_in_bounds_over_many_ticks() {
        let arena = arena();
        let mut donuts = vec![
            donut(Vec2::new(10.0, 10.0), Vec2::new(-4.5, 3.3)),
            donut(Vec2::new(700.0, 500.0), Vec2::new(4.4, 4.1)),
            donut(Vec2::new(400.0, 0.0), Vec2::new(1.5, -2.2)),
        ];
        for _ in 0..5000 {
            advance_all(&mut donuts, &arena);
            for d in &donuts {
                assert!(arena.contains(d.position), "escaped: {:?}", d.position);
            }
        }
    }
}
