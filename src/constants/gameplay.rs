//! Player constants (health, combat, movement tuning).

/// Player's default starting (and maximum) health
pub const PLAYER_STARTING_HEALTH: i32 = 100;
/// Damage dealt by the player on contact
pub const PLAYER_POWER: i32 = 7;
/// Player defense (not yet subtracted from incoming damage)
pub const PLAYER_DEFENSE: i32 = 2;
/// Speed limit in pixels per update
pub const PLAYER_MAX_SPEED: f32 = 3.0;
/// Velocity gained per update while a direction key is held
pub const PLAYER_ACCELERATION: f32 = 0.2;
/// Velocity lost per update when coasting
pub const PLAYER_FRICTION: f32 = 0.06;

/// Hit box edge length; a little under one 16px tile so entities fit through corridors
pub const ENTITY_FOOTPRINT: f32 = 14.0;
