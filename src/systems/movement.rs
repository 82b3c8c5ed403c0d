//! Player movement system: friction, key acceleration and speed cap.

use crate::components::{Facing, Motion, MovementInput, Velocity, WalkAnimation};
use hecs::World;

/// Update velocities from held keys.
///
/// Per axis: friction pulls the velocity toward zero (snapping to zero when
/// it is within `friction`), a held key adds `acceleration` unless its
/// opposite is held too, and the result is capped at `max_speed`.
/// Horizontal input decides facing over vertical input.
pub fn apply_movement_input(world: &mut World) {
    puffin::profile_function!();
    for (_id, (input, motion, vel, anim)) in world.query_mut::<(
        &MovementInput,
        &Motion,
        &mut Velocity,
        Option<&mut WalkAnimation>,
    )>() {
        vel.dx = apply_friction(vel.dx, motion.friction);
        vel.dy = apply_friction(vel.dy, motion.friction);

        let mut facing = None;
        if input.up && !input.down {
            vel.dy += motion.acceleration;
            facing = Some(Facing::North);
        } else if input.down && !input.up {
            vel.dy -= motion.acceleration;
            facing = Some(Facing::South);
        }
        if input.left && !input.right {
            vel.dx -= motion.acceleration;
            facing = Some(Facing::West);
        } else if input.right && !input.left {
            vel.dx += motion.acceleration;
            facing = Some(Facing::East);
        }

        vel.dx = vel.dx.clamp(-motion.max_speed, motion.max_speed);
        vel.dy = vel.dy.clamp(-motion.max_speed, motion.max_speed);

        if let (Some(anim), Some(facing)) = (anim, facing) {
            anim.facing = facing;
        }
    }
}

fn apply_friction(v: f32, friction: f32) -> f32 {
    if v > friction {
        v - friction
    } else if v < -friction {
        v + friction
    } else {
        0.0
    }
}
