//! Dungeon generation constants.

/// Default dungeon width in cells
pub const DUNGEON_DEFAULT_WIDTH: i32 = 32;
/// Default dungeon height in cells
pub const DUNGEON_DEFAULT_HEIGHT: i32 = 32;
/// BSP cutoff: regions stop splitting once both extents are below this
pub const DUNGEON_MAX_LEAF_SIZE: i32 = 15;
/// Chance that a leaf is left empty instead of getting a room.
/// This is the skip side of the roll: four leaves in five get a room.
pub const DUNGEON_ROOM_SKIP_CHANCE: f64 = 0.20;
/// Smallest room extent, as a percentage of the leaf extent (inclusive)
pub const DUNGEON_ROOM_MIN_PERCENT: u32 = 60;
/// Largest room extent, as a percentage of the leaf extent (exclusive)
pub const DUNGEON_ROOM_MAX_PERCENT: u32 = 100;
/// Pivot jitter around the midpoint when splitting a region
pub const DUNGEON_SPLIT_JITTER: i32 = 2;
/// Corridors at least this long get a door at both ends
pub const DUNGEON_DOUBLE_DOOR_GAP: i32 = 4;

/// Sprite scaling applied to the 8px source tiles
pub const SPRITE_SCALING: i32 = 2;
/// Size of one grid cell in world pixels
pub const TILE_SIZE: i32 = 8 * SPRITE_SCALING;
/// Attempts before the spawn-point search gives up
pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
