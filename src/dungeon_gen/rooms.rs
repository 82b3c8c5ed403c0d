//! Room carving inside BSP leaves.

use super::bsp::Region;
use crate::constants::{DUNGEON_ROOM_MAX_PERCENT, DUNGEON_ROOM_MIN_PERCENT};
use crate::grid::Grid;
use crate::tile::CellTag;
use rand::Rng;
use std::ops::Range;

/// A carved room, anchored at its top-left cell `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Room {
    pub row: i32,
    pub col: i32,
    pub height: i32,
    pub width: i32,
}

impl Room {
    pub fn new(row: i32, col: i32, height: i32, width: i32) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    pub fn rows(&self) -> Range<i32> {
        self.row..self.row + self.height
    }

    pub fn cols(&self) -> Range<i32> {
        self.col..self.col + self.width
    }

    pub fn last_row(&self) -> i32 {
        self.row + self.height - 1
    }

    pub fn last_col(&self) -> i32 {
        self.col + self.width - 1
    }

    /// Integer center `(row, col)`
    pub fn center(&self) -> (i32, i32) {
        (self.row + self.height / 2, self.col + self.width / 2)
    }

    /// Euclidean distance between the two centers
    pub fn distance_to(&self, other: &Room) -> f64 {
        let (r1, c1) = self.center();
        let (r2, c2) = other.center();
        (((r1 - r2).pow(2) + (c1 - c2).pow(2)) as f64).sqrt()
    }

    /// Rows both rooms span, ascending
    pub fn shared_rows(&self, other: &Room) -> Vec<i32> {
        (self.row.max(other.row)..(self.row + self.height).min(other.row + other.height)).collect()
    }

    /// Columns both rooms span, ascending
    pub fn shared_cols(&self, other: &Room) -> Vec<i32> {
        (self.col.max(other.col)..(self.col + self.width).min(other.col + other.width)).collect()
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }
}

/// Carve at most one room per leaf and return them in leaf order.
///
/// Each leaf is skipped with probability `skip_chance`, so some sections of
/// the map stay solid. Overlap between rooms is not checked.
pub fn carve_rooms(
    grid: &mut Grid,
    leaves: &[Region],
    skip_chance: f64,
    rng: &mut impl Rng,
) -> Vec<Room> {
    puffin::profile_function!();
    let mut rooms = Vec::new();

    for leaf in leaves {
        if rng.gen_bool(skip_chance) {
            continue;
        }

        let section_width = leaf.width();
        let section_height = leaf.height();

        let room_width = scaled_extent(section_width, rng);
        let room_height = scaled_extent(section_height, rng);
        if room_width == 0 || room_height == 0 {
            continue;
        }

        // Jiggle the room inside its section when it doesn't fill it
        let start_row = if section_height > room_height {
            leaf.min_row + rng.gen_range(0..section_height - room_height)
        } else {
            leaf.min_row
        };
        let start_col = if section_width > room_width {
            leaf.min_col + rng.gen_range(0..section_width - room_width)
        } else {
            leaf.min_col
        };

        let room = Room::new(start_row, start_col, room_height, room_width);
        stamp_room(grid, &room);
        rooms.push(room);
    }

    rooms
}

/// 60-99% of `extent`, rounded half to even
fn scaled_extent(extent: i32, rng: &mut impl Rng) -> i32 {
    let percent = rng.gen_range(DUNGEON_ROOM_MIN_PERCENT..DUNGEON_ROOM_MAX_PERCENT);
    (percent as f64 / 100.0 * extent as f64).round_ties_even() as i32
}

/// Write the room's outline and floor into the grid.
pub fn stamp_room(grid: &mut Grid, room: &Room) {
    let first_row = room.row;
    let last_row = room.last_row();
    let first_col = room.col;
    let last_col = room.last_col();

    for r in room.rows() {
        for c in room.cols() {
            let tag = if r == first_row {
                if c == first_col {
                    CellTag::CornerSW
                } else if c == last_col {
                    CellTag::CornerSE
                } else {
                    CellTag::WallHorizontal
                }
            } else if r == last_row {
                if c == first_col {
                    CellTag::CornerNW
                } else if c == last_col {
                    CellTag::CornerNE
                } else {
                    CellTag::WallHorizontal
                }
            } else if c == first_col || c == last_col {
                CellTag::WallVertical
            } else {
                CellTag::Floor
            };
            grid.set(r, c, tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DUNGEON_ROOM_SKIP_CHANCE;
    use crate::dungeon_gen::bsp::partition;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_room_center_and_distance() {
        let a = Room::new(0, 0, 10, 10);
        assert_eq!(a.center(), (5, 5));
        let b = Room::new(5, 5, 6, 4);
        assert_eq!(b.center(), (8, 7));
        assert!((a.distance_to(&b) - 13f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_shared_ranges() {
        let a = Room::new(2, 1, 5, 4);
        let b = Room::new(4, 10, 6, 3);
        assert_eq!(a.shared_rows(&b), vec![4, 5, 6]);
        assert!(a.shared_cols(&b).is_empty());
    }

    #[test]
    fn test_stamp_room_tags() {
        let mut grid = Grid::new(10, 10);
        stamp_room(&mut grid, &Room::new(1, 1, 4, 5));

        assert_eq!(grid.get(1, 1), Some(CellTag::CornerSW));
        assert_eq!(grid.get(1, 5), Some(CellTag::CornerSE));
        assert_eq!(grid.get(4, 1), Some(CellTag::CornerNW));
        assert_eq!(grid.get(4, 5), Some(CellTag::CornerNE));
        assert_eq!(grid.get(1, 3), Some(CellTag::WallHorizontal));
        assert_eq!(grid.get(4, 2), Some(CellTag::WallHorizontal));
        assert_eq!(grid.get(2, 1), Some(CellTag::WallVertical));
        assert_eq!(grid.get(3, 5), Some(CellTag::WallVertical));
        assert_eq!(grid.get(2, 3), Some(CellTag::Floor));
        // Outside the footprint nothing changed
        assert_eq!(grid.get(0, 0), Some(CellTag::Wall));
        assert_eq!(grid.get(5, 6), Some(CellTag::Wall));
        assert_eq!(grid.count(CellTag::Floor), 2 * 3);
    }

    #[test]
    fn test_single_row_room_uses_first_row_tags() {
        let mut grid = Grid::new(6, 3);
        stamp_room(&mut grid, &Room::new(1, 1, 1, 4));
        assert_eq!(grid.get(1, 1), Some(CellTag::CornerSW));
        assert_eq!(grid.get(1, 2), Some(CellTag::WallHorizontal));
        assert_eq!(grid.get(1, 4), Some(CellTag::CornerSE));
    }

    #[test]
    fn test_rooms_fit_inside_their_leaves() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(32, 32);
            let leaves = partition(Region::new(1, 1, 31, 31), 15, &mut rng);
            let rooms = carve_rooms(&mut grid, &leaves, 0.0, &mut rng);

            for room in &rooms {
                let leaf = leaves
                    .iter()
                    .find(|l| l.contains(room.row, room.col))
                    .unwrap();
                // Rooms never reach the leaf's last row/column, leaving a gap to the neighbour
                assert!(room.last_row() < leaf.max_row, "{:?} in {:?}", room, leaf);
                assert!(room.last_col() < leaf.max_col, "{:?} in {:?}", room, leaf);
                assert!(room.width >= (leaf.width() as f64 * 0.6).round() as i32 - 1);
                assert!(room.width <= leaf.width());
                assert!(room.height <= leaf.height());
            }
        }
    }

    #[test]
    fn test_skip_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        let leaves = partition(Region::new(1, 1, 31, 31), 15, &mut rng);

        let mut grid = Grid::new(32, 32);
        let none = carve_rooms(&mut grid, &leaves, 1.0, &mut rng);
        assert!(none.is_empty());
        assert_eq!(grid.count(CellTag::Wall), 32 * 32);

        let mut grid = Grid::new(32, 32);
        let all = carve_rooms(&mut grid, &leaves, 0.0, &mut rng);
        let usable = leaves.iter().filter(|l| l.height() > 0 && l.width() > 0).count();
        assert_eq!(all.len(), usable);
    }

    #[test]
    fn test_default_skip_chance_carves_most_leaves() {
        let mut leaves_seen = 0;
        let mut carved = 0;
        for seed in 0..400 {
            let mut rng = StdRng::seed_from_u64(seed);
            let leaves = partition(Region::new(1, 1, 31, 31), 15, &mut rng);
            let mut grid = Grid::new(32, 32);
            carved += carve_rooms(&mut grid, &leaves, DUNGEON_ROOM_SKIP_CHANCE, &mut rng).len();
            leaves_seen += leaves.len();
        }
        let rate = carved as f64 / leaves_seen as f64;
        assert!((0.75..0.85).contains(&rate), "carved {:.3} of leaves", rate);
    }
}
