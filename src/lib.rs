//! BSP dungeon generation and the small game session built around it.

pub mod camera;
pub mod components;
pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod game;
pub mod grid;
pub mod spawning;
pub mod systems;
pub mod tile;
pub mod world_gen;

pub use config::GameConfig;
pub use dungeon_gen::{Dungeon, DungeonGenerator};
pub use error::{Result, RoguelikeError};
pub use game::Game;
pub use grid::Grid;
pub use tile::CellTag;
