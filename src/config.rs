//! Game configuration.
//!
//! One explicit struct passed into every entry point. Each section can be
//! loaded from JSON; missing fields fall back to the values in `constants`.

use crate::constants::*;
use crate::error::{Result, RoguelikeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the connectivity engine does when no adjacency edge links two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityFallback {
    /// Join the two closest rooms (by center) with an L-shaped corridor
    #[default]
    NearestCentroid,
    /// Abort generation with `RoguelikeError::UnreachableRoom`
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    /// BSP threshold (`MAX`): leaves have both extents below this
    pub max_leaf_size: i32,
    pub room_skip_chance: f64,
    pub fallback: ConnectivityFallback,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            max_leaf_size: DUNGEON_MAX_LEAF_SIZE,
            room_skip_chance: DUNGEON_ROOM_SKIP_CHANCE,
            fallback: ConnectivityFallback::default(),
        }
    }
}

/// A forest to grow around `center` (x = column, y = row).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestSpec {
    pub center: (i32, i32),
    #[serde(default = "default_forest_radius")]
    pub radius: i32,
}

fn default_forest_radius() -> i32 {
    FOREST_DEFAULT_RADIUS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub tree_count: usize,
    pub forest_density: f32,
    pub forests: Vec<ForestSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            tree_count: WORLD_TREE_COUNT,
            forest_density: FOREST_DENSITY,
            forests: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub power: i32,
    pub defense: i32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_STARTING_HEALTH,
            power: PLAYER_POWER,
            defense: PLAYER_DEFENSE,
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCELERATION,
            friction: PLAYER_FRICTION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    pub health: i32,
    pub count: usize,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            health: MONSTER_HEALTH,
            count: MONSTER_SPAWN_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_DEFAULT_WIDTH,
            height: WINDOW_DEFAULT_HEIGHT,
            margin: VIEWPORT_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the session RNG; `None` draws one from the OS
    pub seed: Option<u64>,
    /// World pixels per grid cell
    pub tile_size: i32,
    pub max_spawn_attempts: u32,
    pub dungeon: DungeonConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub monsters: MonsterConfig,
    pub viewport: ViewportConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tile_size: TILE_SIZE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            dungeon: DungeonConfig::default(),
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            monsters: MonsterConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = std::fs::read_to_string(path).map_err(|source| RoguelikeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&json_str).map_err(|source| RoguelikeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size <= 0 {
            return Err(RoguelikeError::invalid("tile_size", "must be positive"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(RoguelikeError::invalid("max_spawn_attempts", "must be positive"));
        }
        self.dungeon.validate()?;
        self.world.validate()?;

        if self.player.max_health <= 0 {
            return Err(RoguelikeError::invalid("player.max_health", "must be positive"));
        }
        if self.player.max_speed <= 0.0 {
            return Err(RoguelikeError::invalid("player.max_speed", "must be positive"));
        }
        if self.player.acceleration < 0.0 || self.player.friction < 0.0 {
            return Err(RoguelikeError::invalid(
                "player.acceleration",
                "acceleration and friction must not be negative",
            ));
        }
        if self.monsters.health <= 0 {
            return Err(RoguelikeError::invalid("monsters.health", "must be positive"));
        }

        let vp = &self.viewport;
        if vp.margin < 0.0 || vp.margin * 2.0 > vp.width.min(vp.height) {
            return Err(RoguelikeError::invalid(
                "viewport.margin",
                format!("{} does not fit a {}x{} view", vp.margin, vp.width, vp.height),
            ));
        }
        Ok(())
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<()> {
        // The outer ring stays solid, so anything under 3 cells has no interior
        if self.width < 3 {
            return Err(RoguelikeError::invalid(
                "dungeon.width",
                format!("must be at least 3, got {}", self.width),
            ));
        }
        if self.height < 3 {
            return Err(RoguelikeError::invalid(
                "dungeon.height",
                format!("must be at least 3, got {}", self.height),
            ));
        }
        if self.max_leaf_size <= 0 {
            return Err(RoguelikeError::invalid(
                "dungeon.max_leaf_size",
                format!("must be positive, got {}", self.max_leaf_size),
            ));
        }
        if !(0.0..=1.0).contains(&self.room_skip_chance) {
            return Err(RoguelikeError::invalid(
                "dungeon.room_skip_chance",
                "must be a probability in [0, 1]",
            ));
        }
        Ok(())
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(RoguelikeError::invalid("world.width", "world dimensions must be positive"));
        }
        if !self.forest_density.is_finite() || self.forest_density < 1.0 {
            return Err(RoguelikeError::invalid("world.forest_density", "must be at least 1.0"));
        }
        if self.forests.iter().any(|f| f.radius < 0) {
            return Err(RoguelikeError::invalid("world.forests", "radius must not be negative"));
        }
        Ok(())
    }
}
