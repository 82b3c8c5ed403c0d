//! Binary space partitioning of the dungeon interior into leaf regions.

use crate::constants::DUNGEON_SPLIT_JITTER;
use rand::Rng;

/// A rectangular region with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub min_row: i32,
    pub min_col: i32,
    pub max_row: i32,
    pub max_col: i32,
}

impl Region {
    pub fn new(min_row: i32, min_col: i32, max_row: i32, max_col: i32) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    /// Row extent (`max_row - min_row`); compared against the split threshold
    /// and used as the room sizing basis.
    pub fn height(&self) -> i32 {
        self.max_row - self.min_row
    }

    /// Column extent (`max_col - min_col`)
    pub fn width(&self) -> i32 {
        self.max_col - self.min_col
    }

    /// Number of cells covered
    pub fn area(&self) -> i64 {
        (self.height() as i64 + 1) * (self.width() as i64 + 1)
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    pub fn intersects(&self, other: &Region) -> bool {
        self.min_row <= other.max_row
            && other.min_row <= self.max_row
            && self.min_col <= other.max_col
            && other.min_col <= self.max_col
    }
}

/// Split `region` until every leaf has both extents below `max_leaf_size`.
///
/// Leaves come back in depth-first order (first half before second half) and
/// tile the input exactly. Always returns at least one leaf.
pub fn partition(region: Region, max_leaf_size: i32, rng: &mut impl Rng) -> Vec<Region> {
    puffin::profile_function!();
    let mut leaves = Vec::new();
    split(region, max_leaf_size, rng, &mut leaves);
    leaves
}

fn split(region: Region, max_leaf_size: i32, rng: &mut impl Rng, leaves: &mut Vec<Region>) {
    let height = region.height();
    let width = region.width();

    if height < max_leaf_size && width < max_leaf_size {
        leaves.push(region);
        return;
    }

    // Only the oversized axis may be cut; if both are oversized, flip a coin
    let split_horizontal = if height < max_leaf_size {
        false
    } else if width < max_leaf_size {
        true
    } else {
        rng.gen_bool(0.5)
    };

    if split_horizontal {
        let pivot = pick_pivot(region.min_row, region.max_row, rng);
        split(
            Region::new(region.min_row, region.min_col, pivot, region.max_col),
            max_leaf_size,
            rng,
            leaves,
        );
        split(
            Region::new(pivot + 1, region.min_col, region.max_row, region.max_col),
            max_leaf_size,
            rng,
            leaves,
        );
    } else {
        let pivot = pick_pivot(region.min_col, region.max_col, rng);
        split(
            Region::new(region.min_row, region.min_col, region.max_row, pivot),
            max_leaf_size,
            rng,
            leaves,
        );
        split(
            Region::new(region.min_row, pivot + 1, region.max_row, region.max_col),
            max_leaf_size,
            rng,
            leaves,
        );
    }
}

/// Midpoint plus a small jitter, kept inside `[min, max - 1]` so neither half
/// is empty. Callers guarantee `max > min`.
fn pick_pivot(min: i32, max: i32, rng: &mut impl Rng) -> i32 {
    let mid = (min + max).div_euclid(2);
    let jitter = rng.gen_range(-DUNGEON_SPLIT_JITTER..=DUNGEON_SPLIT_JITTER);
    (mid + jitter).clamp(min, max - 1)
}
