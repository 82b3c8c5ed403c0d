//! Overworld (tree / forest) placement constants.

/// Trees scattered by `place_random_trees`
pub const WORLD_TREE_COUNT: usize = 20;
/// Forest density: 1.0 places nothing, larger values fill the forest more
pub const FOREST_DENSITY: f32 = 1.3;
/// Default forest radius in cells
pub const FOREST_DEFAULT_RADIUS: i32 = 4;
/// Maximum tree health
pub const TREE_HEALTH: i32 = 100;
