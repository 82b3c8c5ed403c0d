/// Tile indices into the dungeon tileset (tile_NNNN.png)
pub mod tile_ids {
    pub const WALL: u32 = 11;
    pub const CORNER_NW: u32 = 90;
    pub const WALL_HORIZONTAL: u32 = 91;
    pub const CORNER_NE: u32 = 93;
    pub const WALL_VERTICAL: u32 = 94;
    pub const CORNER_SW: u32 = 96;
    pub const CORNER_SE: u32 = 99;

    // Entities
    pub const MONSTER: u32 = 9;
    pub const TREE: u32 = 55;
}

/// Tag of a single dungeon cell.
///
/// Rows grow downward in the grid, so the room carver treats a room's first
/// row as its "south" edge and its last row as "north".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellTag {
    #[default]
    Wall,
    Floor,
    CornerNW,
    CornerNE,
    CornerSW,
    CornerSE,
    WallHorizontal,
    WallVertical,
    Door,
}

impl CellTag {
    /// Tileset index the rendering side should draw for this cell.
    /// Floor and door cells are left to the background layer.
    pub fn sprite_id(&self) -> Option<u32> {
        match self {
            CellTag::Wall => Some(tile_ids::WALL),
            CellTag::CornerNW => Some(tile_ids::CORNER_NW),
            CellTag::CornerNE => Some(tile_ids::CORNER_NE),
            CellTag::CornerSW => Some(tile_ids::CORNER_SW),
            CellTag::CornerSE => Some(tile_ids::CORNER_SE),
            CellTag::WallHorizontal => Some(tile_ids::WALL_HORIZONTAL),
            CellTag::WallVertical => Some(tile_ids::WALL_VERTICAL),
            CellTag::Floor | CellTag::Door => None,
        }
    }

    /// Every cell that gets a wall sprite blocks movement.
    pub fn is_solid(&self) -> bool {
        self.sprite_id().is_some()
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, CellTag::Floor | CellTag::Door)
    }

    /// Part of a room outline (corner or wall segment)
    pub fn is_room_wall(&self) -> bool {
        matches!(
            self,
            CellTag::CornerNW
                | CellTag::CornerNE
                | CellTag::CornerSW
                | CellTag::CornerSE
                | CellTag::WallHorizontal
                | CellTag::WallVertical
        )
    }

    /// Single-character glyph for text dumps of the map
    pub fn glyph(&self) -> char {
        match self {
            CellTag::Wall => '#',
            CellTag::Floor => '.',
            CellTag::Door => '+',
            CellTag::CornerNW | CellTag::CornerNE | CellTag::CornerSW | CellTag::CornerSE => 'o',
            CellTag::WallHorizontal => '-',
            CellTag::WallVertical => '|',
        }
    }
}
