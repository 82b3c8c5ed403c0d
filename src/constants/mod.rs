//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! These are the defaults `GameConfig` falls back to; a loaded config file
//! overrides them per field.

mod animation;
mod camera;
mod dungeon;
mod enemies;
mod gameplay;
mod world;

pub use animation::*;
pub use camera::*;
pub use dungeon::*;
pub use enemies::*;
pub use gameplay::*;
pub use world::*;
