//! Simple physics: move each axis separately and undo moves into walls.

use crate::components::{Footprint, Position, Velocity};
use crate::grid::Grid;
use crate::spawning::Collider;
use hecs::World;

/// Apply velocities. x first, then y; an axis whose move would overlap a
/// solid cell is reverted and its velocity zeroed, so entities slide along
/// walls. Returns true if anything moved.
pub fn step(world: &mut World, grid: &Grid, collider: &impl Collider) -> bool {
    puffin::profile_function!();
    let mut moved = false;

    for (_id, (pos, vel, footprint)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Footprint)>()
    {
        if vel.dx != 0.0 {
            let old_x = pos.x;
            pos.x += vel.dx;
            if collider.collides(grid, &footprint.aabb(pos.as_vec2())) {
                pos.x = old_x;
                vel.dx = 0.0;
            } else {
                moved = true;
            }
        }

        if vel.dy != 0.0 {
            let old_y = pos.y;
            pos.y += vel.dy;
            if collider.collides(grid, &footprint.aabb(pos.as_vec2())) {
                pos.y = old_y;
                vel.dy = 0.0;
            } else {
                moved = true;
            }
        }
    }

    moved
}
