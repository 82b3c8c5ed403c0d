//! Walk animation constants.

/// Frames in one walk cycle (per facing direction)
pub const WALK_ANIMATION_FRAMES: u32 = 4;
/// Updates spent on each walk frame before advancing
pub const WALK_UPDATES_PER_FRAME: u32 = 5;
