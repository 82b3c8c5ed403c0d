use crate::tile::CellTag;
use glam::Vec2;
use std::collections::VecDeque;

/// Fixed-size dungeon grid. Cells are addressed by `(row, col)`; row 0 is the
/// bottom of the world (world y grows with the row index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<CellTag>,
}

impl Grid {
    /// A grid filled entirely with `Wall`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellTag::Wall; width * height],
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    pub fn get(&self, row: i32, col: i32) -> Option<CellTag> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Returns false (and changes nothing) when the cell is out of bounds.
    pub fn set(&mut self, row: i32, col: i32, tag: CellTag) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tag;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[CellTag] {
        &self.cells
    }

    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|&&t| t == tag).count()
    }

    /// `(row, col, tag)` for every cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, CellTag)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &tag)| ((i / width) as i32, (i % width) as i32, tag))
    }

    /// World-space center of a cell, where the renderer places its sprite
    pub fn cell_center(row: i32, col: i32, tile_size: i32) -> Vec2 {
        let ts = tile_size as f32;
        Vec2::new(col as f32 * ts + ts / 2.0, row as f32 * ts + ts / 2.0)
    }

    /// Breadth-first flood fill over 4-connected cells accepted by `passable`.
    /// Returns a row-major mask of visited cells; empty if `start` is not passable.
    pub fn flood_fill(&self, start: (i32, i32), passable: impl Fn(CellTag) -> bool) -> Vec<bool> {
        let mut visited = vec![false; self.cells.len()];
        let Some(start_idx) = self.index(start.0, start.1) else {
            return visited;
        };
        if !passable(self.cells[start_idx]) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited[start_idx] = true;
        queue.push_back(start);

        while let Some((row, col)) = queue.pop_front() {
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nr, nc) = (row + dr, col + dc);
                if let Some(idx) = self.index(nr, nc) {
                    if !visited[idx] && passable(self.cells[idx]) {
                        visited[idx] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }

        visited
    }

    /// Text dump, one line per row, top row (highest index) first
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)).rev() {
            out.extend(row.iter().map(|tag| tag.glyph()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_wall() {
        let grid = Grid::new(8, 5);
        assert_eq!(grid.cells().len(), 40);
        assert_eq!(grid.count(CellTag::Wall), 40);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(4, 3);
        assert!(grid.set(2, 3, CellTag::Floor));
        assert_eq!(grid.get(2, 3), Some(CellTag::Floor));
        assert!(!grid.set(3, 0, CellTag::Floor));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.set(1, 2, CellTag::Door);
        let last = grid.iter().last().unwrap();
        assert_eq!(last, (1, 2, CellTag::Door));
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(Grid::cell_center(0, 0, 16), Vec2::new(8.0, 8.0));
        assert_eq!(Grid::cell_center(2, 3, 16), Vec2::new(56.0, 40.0));
    }

    #[test]
    fn test_flood_fill_stops_at_walls() {
        let mut grid = Grid::new(5, 1);
        grid.set(0, 0, CellTag::Floor);
        grid.set(0, 1, CellTag::Floor);
        grid.set(0, 3, CellTag::Floor);
        let mask = grid.flood_fill((0, 0), |t| t != CellTag::Wall);
        assert_eq!(mask, vec![true, true, false, false, false]);
    }

    #[test]
    fn test_flood_fill_from_wall_is_empty() {
        let grid = Grid::new(3, 3);
        let mask = grid.flood_fill((1, 1), |t| t.is_walkable());
        assert!(mask.iter().all(|v| !v));
    }

    #[test]
    fn test_ascii_dump() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 1, CellTag::Floor);
        grid.set(1, 1, CellTag::Door);
        assert_eq!(grid.to_ascii(), "#+#\n#.#\n");
    }
}
