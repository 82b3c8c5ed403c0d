//! Monster constants.

/// Monster health
pub const MONSTER_HEALTH: i32 = 20;
/// Number of monsters spawned with a new session
pub const MONSTER_SPAWN_COUNT: usize = 1;
