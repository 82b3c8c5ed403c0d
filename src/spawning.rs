//! Spawn-point search and entity spawning.
//!
//! Entities are placed at random grid-aligned pixel positions until their
//! footprint clears every solid cell. The collision test sits behind the
//! `Collider` trait so a physics layer can replace the tile check.

use crate::components::{
    Aabb, Combat, EntityKind, Footprint, Health, Motion, MovementInput, Position, Sprite,
    Velocity, WalkAnimation,
};
use crate::config::{MonsterConfig, PlayerConfig};
use crate::constants::*;
use crate::error::{Result, RoguelikeError};
use crate::grid::Grid;
use crate::tile::tile_ids;
use glam::Vec2;
use hecs::World;
use log::debug;
use rand::Rng;

/// Answers whether a box in world pixels hits anything solid on the grid.
pub trait Collider {
    fn collides(&self, grid: &Grid, bounds: &Aabb) -> bool;

    fn collides_at(&self, grid: &Grid, footprint: Footprint, center: Vec2) -> bool {
        self.collides(grid, &footprint.aabb(center))
    }
}

/// Treats every cell with a wall sprite as a `tile_size` square.
/// Space outside the grid is open.
#[derive(Debug, Clone, Copy)]
pub struct TileCollider {
    pub tile_size: i32,
}

impl TileCollider {
    pub fn new(tile_size: i32) -> Self {
        Self { tile_size }
    }

    fn cell_bounds(&self, row: i32, col: i32) -> Aabb {
        let ts = self.tile_size as f32;
        Aabb {
            min: Vec2::new(col as f32 * ts, row as f32 * ts),
            max: Vec2::new((col + 1) as f32 * ts, (row + 1) as f32 * ts),
        }
    }
}

impl Collider for TileCollider {
    fn collides(&self, grid: &Grid, bounds: &Aabb) -> bool {
        let ts = self.tile_size as f32;
        let col_lo = (bounds.min.x / ts).floor() as i32;
        let col_hi = (bounds.max.x / ts).ceil() as i32;
        let row_lo = (bounds.min.y / ts).floor() as i32;
        let row_hi = (bounds.max.y / ts).ceil() as i32;

        for row in row_lo..row_hi {
            for col in col_lo..col_hi {
                let solid = grid.get(row, col).is_some_and(|tag| tag.is_solid());
                if solid && self.cell_bounds(row, col).overlaps(bounds) {
                    return true;
                }
            }
        }
        false
    }
}

/// Sample `(randrange(width) * tile, randrange(height) * tile)` until the
/// footprint placed there is clear, giving up after `max_attempts`.
pub fn find_spawn_point(
    grid: &Grid,
    footprint: Footprint,
    tile_size: i32,
    collider: &impl Collider,
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Result<Vec2> {
    puffin::profile_function!();
    for attempt in 1..=max_attempts {
        let x = rng.gen_range(0..grid.width as i32) * tile_size;
        let y = rng.gen_range(0..grid.height as i32) * tile_size;
        let candidate = Vec2::new(x as f32, y as f32);
        if !collider.collides_at(grid, footprint, candidate) {
            debug!("Spawn point {:?} found after {} attempts", candidate, attempt);
            return Ok(candidate);
        }
    }
    Err(RoguelikeError::NoSpawnPoint {
        attempts: max_attempts,
    })
}

/// Definition of a monster type - all the data needed to spawn one
#[derive(Clone, Debug)]
pub struct MonsterDef {
    /// Display name (for logs)
    pub name: &'static str,
    /// Tile ID from the tileset
    pub tile_id: u32,
    pub health: i32,
    pub power: i32,
    pub defense: i32,
}

impl MonsterDef {
    pub fn spawn(&self, world: &mut World, at: Vec2) -> hecs::Entity {
        world.spawn((
            Position::from_vec2(at),
            Footprint::square(ENTITY_FOOTPRINT),
            Sprite {
                tile_id: self.tile_id,
            },
            Health::new(self.health),
            Combat {
                power: self.power,
                defense: self.defense,
            },
            EntityKind::Monster,
        ))
    }

    /// Apply the health override from a config
    pub fn with_config(&self, config: &MonsterConfig) -> Self {
        Self {
            health: config.health,
            ..self.clone()
        }
    }
}

/// Predefined monster types
pub mod monsters {
    use super::*;

    pub const GHOUL: MonsterDef = MonsterDef {
        name: "Ghoul",
        tile_id: tile_ids::MONSTER,
        health: MONSTER_HEALTH,
        power: 0,
        defense: 0,
    };
}

pub fn spawn_player(world: &mut World, at: Vec2, config: &PlayerConfig) -> hecs::Entity {
    world.spawn((
        Position::from_vec2(at),
        Velocity::default(),
        Footprint::square(ENTITY_FOOTPRINT),
        Health::new(config.max_health),
        Combat {
            power: config.power,
            defense: config.defense,
        },
        MovementInput::default(),
        Motion {
            max_speed: config.max_speed,
            acceleration: config.acceleration,
            friction: config.friction,
        },
        WalkAnimation::new(WALK_ANIMATION_FRAMES, WALK_UPDATES_PER_FRAME),
        EntityKind::Player,
    ))
}

/// Trees are overworld decoration. They carry no `Footprint`, so physics and
/// contact combat pass through them.
pub fn spawn_tree(world: &mut World, at: Vec2) -> hecs::Entity {
    world.spawn((
        Position::from_vec2(at),
        Sprite {
            tile_id: tile_ids::TREE,
        },
        Health::new(TREE_HEALTH),
        EntityKind::Tree,
    ))
}
