//! Procedural dungeon generation.
//!
//! The interior of the grid is split into BSP leaves, a room is carved in most
//! leaves, and rooms are then joined by corridors until every room can reach
//! every other one.

pub mod bsp;
pub mod connect;
pub mod rooms;

pub use bsp::{partition, Region};
pub use connect::{adjacency_table, connect_rooms, Adjacency, Axis, Corridor, CorridorShape};
pub use rooms::{carve_rooms, stamp_room, Room};

use crate::config::DungeonConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::tile::CellTag;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A finished dungeon. Only ever handed out fully connected.
#[derive(Clone, Debug, PartialEq)]
pub struct Dungeon {
    pub grid: Grid,
    /// BSP leaves in partition order
    pub leaves: Vec<Region>,
    /// Carved rooms in leaf order; corridors refer to them by index
    pub rooms: Vec<Room>,
    /// Corridors in carve order
    pub corridors: Vec<Corridor>,
}

impl Dungeon {
    /// True when every room can reach every other over non-`Wall` cells.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.rooms.first() else {
            return true;
        };
        let reachable = self
            .grid
            .flood_fill((first.row, first.col), |tag| tag != CellTag::Wall);
        self.rooms
            .iter()
            .all(|room| reachable[room.row as usize * self.grid.width + room.col as usize])
    }

    pub fn door_positions(&self) -> Vec<(i32, i32)> {
        self.corridors
            .iter()
            .flat_map(|c| c.doors.iter().copied())
            .collect()
    }
}

pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Generate a dungeon using the caller's RNG.
    ///
    /// The outer ring of the grid is never carved; the BSP covers
    /// `(1, 1, height - 1, width - 1)`.
    pub fn generate(config: &DungeonConfig, rng: &mut impl Rng) -> Result<Dungeon> {
        puffin::profile_function!();
        config.validate()?;

        let mut grid = Grid::new(config.width as usize, config.height as usize);

        let leaves = {
            puffin::profile_scope!("bsp");
            partition(
                Region::new(1, 1, config.height - 1, config.width - 1),
                config.max_leaf_size,
                rng,
            )
        };

        let rooms = carve_rooms(&mut grid, &leaves, config.room_skip_chance, rng);
        let corridors = connect_rooms(&mut grid, &rooms, config.fallback, rng)?;

        info!(
            "Generated {}x{} dungeon: {} leaves, {} rooms, {} corridors",
            config.width,
            config.height,
            leaves.len(),
            rooms.len(),
            corridors.len()
        );

        Ok(Dungeon {
            grid,
            leaves,
            rooms,
            corridors,
        })
    }

    /// Same as [`DungeonGenerator::generate`] with a fresh `StdRng` from `seed`.
    pub fn generate_seeded(config: &DungeonConfig, seed: u64) -> Result<Dungeon> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }
}
