//! Room adjacency and corridor carving.
//!
//! Rooms start in singleton groups. Each pass finds the shortest adjacency
//! edge that leaves its group, carves a straight corridor along it and merges
//! the two groups, until a single group remains.

use super::rooms::Room;
use crate::config::ConnectivityFallback;
use crate::constants::DUNGEON_DOUBLE_DOOR_GAP;
use crate::error::{Result, RoguelikeError};
use crate::grid::Grid;
use crate::tile::CellTag;
use log::{debug, warn};
use rand::Rng;

/// Axis along which two rooms face each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Row ranges overlap; the corridor runs horizontally along a shared row
    Rows,
    /// Column ranges overlap; the corridor runs vertically along a shared column
    Cols,
}

/// One entry of a room's adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjacency {
    pub other: usize,
    pub axis: Axis,
    /// Shared row (or column) indices, ascending
    pub shared: Vec<i32>,
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorridorShape {
    /// Cells `start..end` along row `line` (for `Rows`) or column `line` (for `Cols`)
    Straight {
        axis: Axis,
        line: i32,
        start: i32,
        end: i32,
    },
    /// Fallback link between room centers: `from` → `corner` → `to`, all `(row, col)`
    Elbow {
        from: (i32, i32),
        corner: (i32, i32),
        to: (i32, i32),
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corridor {
    /// Room whose group absorbed the other one
    pub from: usize,
    pub to: usize,
    pub shape: CorridorShape,
    /// `(row, col)` of every door cell
    pub doors: Vec<(i32, i32)>,
}

impl Corridor {
    /// Number of carved cells between the two rooms (straight corridors only)
    pub fn gap(&self) -> Option<i32> {
        match self.shape {
            CorridorShape::Straight { start, end, .. } => Some(end - start),
            CorridorShape::Elbow { .. } => None,
        }
    }
}

/// Adjacency lists indexed by room.
///
/// A pair sharing rows is recorded as `Rows` and never checked for columns:
/// when both apply, horizontal corridors win.
pub fn adjacency_table(rooms: &[Room]) -> Vec<Vec<Adjacency>> {
    rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            let mut edges = Vec::new();
            for (j, other) in rooms.iter().enumerate() {
                if i == j {
                    continue;
                }
                let shared_rows = room.shared_rows(other);
                let (axis, shared) = if !shared_rows.is_empty() {
                    (Axis::Rows, shared_rows)
                } else {
                    let shared_cols = room.shared_cols(other);
                    if shared_cols.is_empty() {
                        continue;
                    }
                    (Axis::Cols, shared_cols)
                };
                edges.push(Adjacency {
                    other: j,
                    axis,
                    shared,
                    distance: room.distance_to(other),
                });
            }
            edges
        })
        .collect()
}

/// Join every room into one connected structure, returning the corridors in
/// the order they were carved.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &[Room],
    fallback: ConnectivityFallback,
    rng: &mut impl Rng,
) -> Result<Vec<Corridor>> {
    puffin::profile_function!();
    let table = adjacency_table(rooms);

    let mut groups: Vec<Vec<usize>> = (0..rooms.len()).map(|i| vec![i]).collect();
    let mut owner: Vec<usize> = (0..rooms.len()).collect();
    let mut corridors = Vec::with_capacity(rooms.len().saturating_sub(1));

    while groups.len() > 1 {
        let (owner_group, corridor) = match closest_adjacent_pair(&groups, &owner, &table) {
            Some((group, room, edge)) => (group, carve_corridor(grid, rooms, room, edge, rng)),
            None => match fallback {
                ConnectivityFallback::Fail => {
                    let stranded = groups[1..].iter().flatten().min().copied().unwrap_or(0);
                    return Err(RoguelikeError::UnreachableRoom { room: stranded });
                }
                ConnectivityFallback::NearestCentroid => {
                    let (group, from, to) = closest_pair_by_center(&groups, &owner, rooms);
                    warn!(
                        "No adjacent room outside group {}; linking rooms {} and {} by centers",
                        group, from, to
                    );
                    (group, carve_elbow(grid, rooms, from, to, rng))
                }
            },
        };
        debug!(
            "Corridor {} -> {}: {:?}, doors {:?}",
            corridor.from, corridor.to, corridor.shape, corridor.doors
        );

        let absorbed_group = owner[corridor.to];
        let absorbed = std::mem::take(&mut groups[absorbed_group]);
        groups[owner_group].extend(absorbed);
        groups.remove(absorbed_group);
        for (gi, group) in groups.iter().enumerate() {
            for &room in group {
                owner[room] = gi;
            }
        }

        corridors.push(corridor);
    }

    Ok(corridors)
}

/// Globally shortest edge crossing a group boundary. Scan order is groups,
/// then rooms within a group, then edges; the first strict minimum wins.
fn closest_adjacent_pair<'a>(
    groups: &[Vec<usize>],
    owner: &[usize],
    table: &'a [Vec<Adjacency>],
) -> Option<(usize, usize, &'a Adjacency)> {
    let mut best: Option<(usize, usize, &Adjacency)> = None;
    for (gi, group) in groups.iter().enumerate() {
        for &room in group {
            for edge in &table[room] {
                if owner[edge.other] == gi {
                    continue;
                }
                if best.map_or(true, |(_, _, b)| edge.distance < b.distance) {
                    best = Some((gi, room, edge));
                }
            }
        }
    }
    best
}

/// Nearest pair of rooms in different groups, ignoring adjacency.
/// Only called with two or more groups.
fn closest_pair_by_center(
    groups: &[Vec<usize>],
    owner: &[usize],
    rooms: &[Room],
) -> (usize, usize, usize) {
    let mut best = (0, groups[0][0], groups[1][0], f64::INFINITY);
    for (gi, group) in groups.iter().enumerate() {
        for &room in group {
            for (other, other_room) in rooms.iter().enumerate() {
                if owner[other] == gi {
                    continue;
                }
                let distance = rooms[room].distance_to(other_room);
                if distance < best.3 {
                    best = (gi, room, other, distance);
                }
            }
        }
    }
    (best.0, best.1, best.2)
}

/// Carve a straight corridor from room `from` along `edge`, on a random
/// shared row (or column), and place doors by gap length.
pub fn carve_corridor(
    grid: &mut Grid,
    rooms: &[Room],
    from: usize,
    edge: &Adjacency,
    rng: &mut impl Rng,
) -> Corridor {
    let a = &rooms[from];
    let b = &rooms[edge.other];
    let line = edge.shared[rng.gen_range(0..edge.shared.len())];

    // Cells strictly between the facing walls
    let (start, end) = match edge.axis {
        Axis::Rows => {
            if a.col + a.width < b.col {
                (a.col + a.width, b.col)
            } else {
                (b.col + b.width, a.col)
            }
        }
        Axis::Cols => {
            if a.row + a.height < b.row {
                (a.row + a.height, b.row)
            } else {
                (b.row + b.height, a.row)
            }
        }
    };

    let cell = |along: i32| match edge.axis {
        Axis::Rows => (line, along),
        Axis::Cols => (along, line),
    };

    for along in start..end {
        let (r, c) = cell(along);
        carve_floor(grid, r, c);
    }

    let gap = end - start;
    let door_cells = if gap >= DUNGEON_DOUBLE_DOOR_GAP {
        vec![cell(start), cell(end - 1)]
    } else if gap == 1 {
        vec![cell(start)]
    } else {
        Vec::new()
    };
    for &(r, c) in &door_cells {
        grid.set(r, c, CellTag::Door);
    }

    Corridor {
        from,
        to: edge.other,
        shape: CorridorShape::Straight {
            axis: edge.axis,
            line,
            start,
            end,
        },
        doors: door_cells,
    }
}

/// L-shaped floor path between two room centers, cutting through whatever
/// lies in the way. Randomly goes horizontal-first or vertical-first.
pub fn carve_elbow(
    grid: &mut Grid,
    rooms: &[Room],
    from: usize,
    to: usize,
    rng: &mut impl Rng,
) -> Corridor {
    let (r1, c1) = rooms[from].center();
    let (r2, c2) = rooms[to].center();

    let corner = if rng.gen_bool(0.5) {
        carve_row_span(grid, r1, c1, c2);
        carve_col_span(grid, c2, r1, r2);
        (r1, c2)
    } else {
        carve_col_span(grid, c1, r1, r2);
        carve_row_span(grid, r2, c1, c2);
        (r2, c1)
    };

    Corridor {
        from,
        to,
        shape: CorridorShape::Elbow {
            from: (r1, c1),
            corner,
            to: (r2, c2),
        },
        doors: Vec::new(),
    }
}

fn carve_row_span(grid: &mut Grid, row: i32, c1: i32, c2: i32) {
    for c in c1.min(c2)..=c1.max(c2) {
        carve_floor(grid, row, c);
    }
}

fn carve_col_span(grid: &mut Grid, col: i32, r1: i32, r2: i32) {
    for r in r1.min(r2)..=r1.max(r2) {
        carve_floor(grid, r, col);
    }
}

/// Doors placed by earlier corridors stay doors when a later one crosses them
fn carve_floor(grid: &mut Grid, row: i32, col: i32) {
    if grid.get(row, col) != Some(CellTag::Door) {
        grid.set(row, col, CellTag::Floor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon_gen::rooms::stamp_room;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stamped(width: usize, height: usize, rooms: &[Room]) -> Grid {
        let mut grid = Grid::new(width, height);
        for room in rooms {
            stamp_room(&mut grid, room);
        }
        grid
    }

    /// Two rooms side by side with `gap` cells between their facing walls
    fn carve_with_gap(gap: i32) -> (Grid, Corridor) {
        let rooms = [Room::new(2, 1, 5, 4), Room::new(2, 5 + gap, 5, 4)];
        let mut grid = stamped(20, 10, &rooms);
        let table = adjacency_table(&rooms);
        let mut rng = StdRng::seed_from_u64(gap as u64);
        let corridor = carve_corridor(&mut grid, &rooms, 0, &table[0][0], &mut rng);
        (grid, corridor)
    }

    #[test]
    fn test_adjacency_prefers_rows() {
        let rooms = [
            Room::new(0, 0, 4, 4),
            Room::new(2, 8, 4, 4),  // shares rows 2..4 with room 0
            Room::new(10, 1, 3, 3), // shares cols 1..4 with room 0
            Room::new(20, 20, 2, 2), // shares nothing
        ];
        let table = adjacency_table(&rooms);

        assert_eq!(table[0].len(), 2);
        assert_eq!(table[0][0].other, 1);
        assert_eq!(table[0][0].axis, Axis::Rows);
        assert_eq!(table[0][0].shared, vec![2, 3]);
        assert_eq!(table[0][1].other, 2);
        assert_eq!(table[0][1].axis, Axis::Cols);
        assert_eq!(table[0][1].shared, vec![1, 2, 3]);
        assert!(table[3].is_empty());

        // Symmetric records point back
        assert!(table[1].iter().any(|e| e.other == 0 && e.axis == Axis::Rows));
    }

    #[test]
    fn test_gap_of_one_gets_single_door() {
        let (grid, corridor) = carve_with_gap(1);
        assert_eq!(corridor.gap(), Some(1));
        assert_eq!(corridor.doors.len(), 1);
        let (r, c) = corridor.doors[0];
        assert_eq!(c, 5);
        assert_eq!(grid.get(r, c), Some(CellTag::Door));
    }

    #[test]
    fn test_short_gaps_get_no_doors() {
        for gap in [2, 3] {
            let (grid, corridor) = carve_with_gap(gap);
            assert_eq!(corridor.gap(), Some(gap));
            assert!(corridor.doors.is_empty());
            assert_eq!(grid.count(CellTag::Door), 0);
            let CorridorShape::Straight { line, .. } = corridor.shape else {
                panic!("expected straight corridor");
            };
            for c in 5..5 + gap {
                assert_eq!(grid.get(line, c), Some(CellTag::Floor));
            }
        }
    }

    #[test]
    fn test_long_gaps_get_doors_at_both_ends() {
        for gap in [4, 7] {
            let (grid, corridor) = carve_with_gap(gap);
            let CorridorShape::Straight { line, start, end, axis } = corridor.shape else {
                panic!("expected straight corridor");
            };
            assert_eq!(axis, Axis::Rows);
            assert_eq!((start, end), (5, 5 + gap));
            assert!((2..7).contains(&line));
            assert_eq!(corridor.doors, vec![(line, start), (line, end - 1)]);
            assert_eq!(grid.get(line, start), Some(CellTag::Door));
            assert_eq!(grid.get(line, end - 1), Some(CellTag::Door));
            for c in start + 1..end - 1 {
                assert_eq!(grid.get(line, c), Some(CellTag::Floor));
            }
        }
    }

    #[test]
    fn test_corridor_keeps_earlier_doors() {
        let rooms = [Room::new(2, 1, 5, 4), Room::new(2, 11, 5, 4)];
        let mut grid = stamped(20, 10, &rooms);
        // A door from an earlier corridor sits on every row the new one may take
        for r in 2..7 {
            grid.set(r, 7, CellTag::Door);
        }
        let table = adjacency_table(&rooms);
        let mut rng = StdRng::seed_from_u64(5);
        let corridor = carve_corridor(&mut grid, &rooms, 0, &table[0][0], &mut rng);
        let CorridorShape::Straight { line, .. } = corridor.shape else {
            panic!("expected straight corridor");
        };

        assert_eq!(grid.get(line, 7), Some(CellTag::Door));
        assert_eq!(grid.get(line, 6), Some(CellTag::Floor));
        assert_eq!(grid.get(line, 8), Some(CellTag::Floor));
        for (r, c) in corridor.doors {
            assert_eq!(grid.get(r, c), Some(CellTag::Door));
        }
    }

    #[test]
    fn test_elbow_keeps_earlier_doors() {
        let rooms = [Room::new(1, 1, 4, 4), Room::new(10, 10, 4, 4)];
        let doors = [(3, 7), (7, 3), (12, 7), (7, 12)];
        for seed in 0..8 {
            let mut grid = stamped(16, 16, &rooms);
            for &(r, c) in &doors {
                grid.set(r, c, CellTag::Door);
            }
            let mut rng = StdRng::seed_from_u64(seed);
            connect_rooms(&mut grid, &rooms, ConnectivityFallback::NearestCentroid, &mut rng)
                .unwrap();
            for &(r, c) in &doors {
                assert_eq!(grid.get(r, c), Some(CellTag::Door), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_column_corridor_runs_vertically() {
        // Rooms stacked along the rows with overlapping columns
        let rooms = [Room::new(1, 2, 4, 6), Room::new(10, 4, 4, 5)];
        let mut grid = stamped(16, 16, &rooms);
        let table = adjacency_table(&rooms);
        assert_eq!(table[0][0].axis, Axis::Cols);

        let mut rng = StdRng::seed_from_u64(8);
        let corridor = carve_corridor(&mut grid, &rooms, 0, &table[0][0], &mut rng);
        let CorridorShape::Straight { line, start, end, .. } = corridor.shape else {
            panic!("expected straight corridor");
        };
        assert_eq!((start, end), (5, 10));
        assert!((4..8).contains(&line));
        assert_eq!(corridor.doors, vec![(5, line), (9, line)]);

        // Carving from the upper room reaches the same span
        let corridor = carve_corridor(&mut grid, &rooms, 1, &table[1][0], &mut rng);
        assert_eq!(corridor.gap(), Some(5));
    }

    #[test]
    fn test_connect_merges_into_one_group() {
        let rooms = [
            Room::new(1, 1, 5, 5),
            Room::new(1, 10, 5, 5),
            Room::new(10, 10, 5, 5),
            Room::new(10, 1, 5, 5),
        ];
        let mut grid = stamped(20, 20, &rooms);
        let mut rng = StdRng::seed_from_u64(2);
        let corridors =
            connect_rooms(&mut grid, &rooms, ConnectivityFallback::Fail, &mut rng).unwrap();

        assert_eq!(corridors.len(), rooms.len() - 1);
        assert!(corridors.iter().all(|c| c.gap() == Some(4)));

        let mask = grid.flood_fill((1, 1), |t| t != CellTag::Wall);
        for room in &rooms {
            assert!(mask[room.row as usize * 20 + room.col as usize], "{:?} unreachable", room);
        }
    }

    #[test]
    fn test_closest_edge_wins() {
        // Room 1 is much closer to room 0 than room 2 is
        let rooms = [
            Room::new(1, 1, 5, 5),
            Room::new(1, 8, 5, 5),
            Room::new(1, 30, 5, 5),
        ];
        let mut grid = stamped(40, 8, &rooms);
        let mut rng = StdRng::seed_from_u64(4);
        let corridors =
            connect_rooms(&mut grid, &rooms, ConnectivityFallback::Fail, &mut rng).unwrap();
        assert_eq!((corridors[0].from, corridors[0].to), (0, 1));
        // Room 1 is now in the merged group and sits nearer to room 2
        assert_eq!((corridors[1].from, corridors[1].to), (1, 2));
    }

    #[test]
    fn test_isolated_room_fails_under_fail_policy() {
        let rooms = [Room::new(1, 1, 4, 4), Room::new(10, 10, 4, 4)];
        let mut grid = stamped(16, 16, &rooms);
        let mut rng = StdRng::seed_from_u64(0);
        let result = connect_rooms(&mut grid, &rooms, ConnectivityFallback::Fail, &mut rng);
        assert!(matches!(result, Err(RoguelikeError::UnreachableRoom { room: 1 })));
    }

    #[test]
    fn test_isolated_room_joined_by_elbow() {
        let rooms = [Room::new(1, 1, 4, 4), Room::new(10, 10, 4, 4)];
        let mut grid = stamped(16, 16, &rooms);
        let mut rng = StdRng::seed_from_u64(0);
        let corridors =
            connect_rooms(&mut grid, &rooms, ConnectivityFallback::NearestCentroid, &mut rng)
                .unwrap();

        assert_eq!(corridors.len(), 1);
        assert!(matches!(corridors[0].shape, CorridorShape::Elbow { .. }));
        assert_eq!(corridors[0].gap(), None);

        let mask = grid.flood_fill(rooms[0].center(), |t| t.is_walkable());
        let (r, c) = rooms[1].center();
        assert!(mask[r as usize * 16 + c as usize]);
    }

    #[test]
    fn test_no_rooms_or_one_room_needs_no_corridor() {
        let mut grid = Grid::new(8, 8);
        let mut rng = StdRng::seed_from_u64(0);
        let none = connect_rooms(&mut grid, &[], ConnectivityFallback::Fail, &mut rng).unwrap();
        assert!(none.is_empty());

        let one = [Room::new(1, 1, 4, 4)];
        let corridors = connect_rooms(&mut grid, &one, ConnectivityFallback::Fail, &mut rng).unwrap();
        assert!(corridors.is_empty());
    }
}
