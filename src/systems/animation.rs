//! Walk cycle animation.

use crate::components::{Velocity, WalkAnimation};
use hecs::World;

/// Advance walk cycles. Standing still resets to frame 0; moving bumps the
/// counter, wrapping once it passes `(max_frames - 1) * updates_per_frame`.
pub fn update_walk_animation(world: &mut World) {
    for (_id, (vel, anim)) in world.query_mut::<(&Velocity, &mut WalkAnimation)>() {
        if vel.is_still() {
            anim.counter = 0;
            continue;
        }
        anim.counter += 1;
        if anim.counter > (anim.max_frames.saturating_sub(1)) * anim.updates_per_frame {
            anim.counter = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_cycle_wraps() {
        let mut world = World::new();
        let e = world.spawn((Velocity { dx: 1.0, dy: 0.0 }, WalkAnimation::new(4, 5)));

        let mut frames = Vec::new();
        for _ in 0..17 {
            update_walk_animation(&mut world);
            frames.push(world.get::<&WalkAnimation>(e).unwrap().frame());
        }
        // Counter runs 1..=15 then wraps to 0
        assert_eq!(&frames[..5], &[0, 0, 0, 0, 1]);
        assert_eq!(frames[14], 3);
        assert_eq!(frames[15], 0);
        assert_eq!(frames[16], 0);
        assert!(frames.iter().all(|&f| f < 4));
    }

    #[test]
    fn test_idle_resets() {
        let mut world = World::new();
        let e = world.spawn((Velocity::default(), WalkAnimation::new(4, 5)));
        world.get::<&mut WalkAnimation>(e).unwrap().counter = 12;
        update_walk_animation(&mut world);
        assert_eq!(world.get::<&WalkAnimation>(e).unwrap().counter, 0);
    }
}
