use glam::Vec2;

/// Position component - world pixel coordinates of the entity's center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Velocity component - pixels per update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Velocity {
    pub fn is_still(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Axis-aligned box in world pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Footprint component - hit box size, centered on `Position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub fn square(size: f32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aabb(&self, position: Vec2) -> Aabb {
        Aabb::from_center(position, self.size())
    }
}

/// Health component
///
/// `current` always stays within `[0, max]`; the only way to change it is
/// through `apply_damage` / `heal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns the damage actually taken
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        let before = self.current;
        self.current = (self.current - amount.max(0)).max(0);
        before - self.current
    }

    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    pub fn percentage(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f32 / self.max as f32).clamp(0.0, 1.0)
    }
}

/// What an entity is; systems select behavior by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Monster,
    Tree,
}

/// Combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combat {
    pub power: i32,
    pub defense: i32,
}

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Movement tuning for entities driven by `MovementInput`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
}

/// Direction a sprite faces; the index selects the texture row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    South,
    North,
    East,
    West,
}

impl Facing {
    pub fn index(&self) -> usize {
        match self {
            Facing::South => 0,
            Facing::North => 1,
            Facing::East => 2,
            Facing::West => 3,
        }
    }
}

/// Walk cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkAnimation {
    pub facing: Facing,
    /// Updates elapsed in the current cycle
    pub counter: u32,
    pub max_frames: u32,
    pub updates_per_frame: u32,
}

impl WalkAnimation {
    pub fn new(max_frames: u32, updates_per_frame: u32) -> Self {
        Self {
            facing: Facing::default(),
            counter: 0,
            max_frames,
            updates_per_frame,
        }
    }

    /// Frame to draw for the current facing
    pub fn frame(&self) -> u32 {
        self.counter / self.updates_per_frame.max(1)
    }
}

/// Sprite component - index into the shared tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub tile_id: u32,
}
