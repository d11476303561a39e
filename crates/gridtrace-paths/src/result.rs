//! Search results and the helpers shared by all three algorithms.

use gridtrace_core::{CellKind, Coord, Grid, UNREACHABLE};

/// The outcome of one search run.
///
/// `visited` holds every expanded cell in expansion order, excluding the
/// start and end markers (they are rendered distinctly by callers).
/// `path`, when present, is the full chain from start to end inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited: Vec<Coord>,
    pub path: Option<Vec<Coord>>,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Stamp this result onto `grid`: visited cells become `Visited`, path
    /// cells become `Path`. Start/end markers keep their kind.
    ///
    /// This is the instantaneous form of what an animating caller does
    /// frame by frame.
    pub fn apply(&self, grid: &mut Grid) {
        for &c in &self.visited {
            if let Some(cell) = grid.cell_mut(c) {
                if !cell.kind.is_marker() {
                    cell.kind = CellKind::Visited;
                }
            }
        }
        if let Some(path) = &self.path {
            for &c in path {
                if let Some(cell) = grid.cell_mut(c) {
                    if !cell.kind.is_marker() {
                        cell.kind = CellKind::Path;
                    }
                }
            }
        }
    }
}

/// Walk `predecessor` links backward from `end` and return the chain in
/// start→end order.
///
/// A cell with no predecessor yields a single-element chain. The result is
/// only meaningful for a cell a search actually reached; the function
/// itself is pure and may be called any number of times.
pub fn reconstruct_path(grid: &Grid, end: Coord) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(c) = cur {
        path.push(c);
        cur = grid.at(c).and_then(|cell| cell.predecessor);
    }
    path.reverse();
    path
}

/// Stable in-place ascending sort of `coords` by cell `distance`.
///
/// Ties keep their input order, which pins Dijkstra's tie-break behavior.
/// Coordinates outside the grid sort as unreachable.
pub fn sort_by_distance(grid: &Grid, coords: &mut [Coord]) {
    coords.sort_by_key(|&c| grid.at(c).map_or(UNREACHABLE, |cell| cell.distance));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_without_predecessor_is_single_cell() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            reconstruct_path(&grid, Coord::new(1, 1)),
            vec![Coord::new(1, 1)]
        );
    }

    #[test]
    fn reconstruct_follows_the_chain_in_start_to_end_order() {
        let mut grid = Grid::new(1, 4).unwrap();
        grid.cell_mut(Coord::new(0, 3)).unwrap().predecessor = Some(Coord::new(0, 2));
        grid.cell_mut(Coord::new(0, 2)).unwrap().predecessor = Some(Coord::new(0, 1));
        grid.cell_mut(Coord::new(0, 1)).unwrap().predecessor = Some(Coord::new(0, 0));
        assert_eq!(
            reconstruct_path(&grid, Coord::new(0, 3)),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3),
            ]
        );
    }

    #[test]
    fn reconstruct_is_idempotent() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.cell_mut(Coord::new(0, 2)).unwrap().predecessor = Some(Coord::new(0, 1));
        grid.cell_mut(Coord::new(0, 1)).unwrap().predecessor = Some(Coord::new(0, 0));
        let first = reconstruct_path(&grid, Coord::new(0, 2));
        let second = reconstruct_path(&grid, Coord::new(0, 2));
        assert_eq!(first, second);
    }

    #[test]
    fn sort_by_distance_is_stable_on_ties() {
        let mut grid = Grid::new(1, 4).unwrap();
        grid.cell_mut(Coord::new(0, 0)).unwrap().distance = 5;
        grid.cell_mut(Coord::new(0, 1)).unwrap().distance = 2;
        grid.cell_mut(Coord::new(0, 2)).unwrap().distance = 5;
        // (0,3) stays unreachable.
        let mut coords = vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(0, 3),
        ];
        sort_by_distance(&grid, &mut coords);
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 0), // tied with (0,2), keeps input order
                Coord::new(0, 2),
                Coord::new(0, 3),
            ]
        );
    }

    #[test]
    fn apply_stamps_visited_and_path_kinds() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_kind(Coord::new(0, 0), CellKind::Start);
        grid.set_kind(Coord::new(0, 2), CellKind::End);
        let result = SearchResult {
            visited: vec![Coord::new(1, 0), Coord::new(1, 1)],
            path: Some(vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
            ]),
        };
        result.apply(&mut grid);
        assert_eq!(grid.at(Coord::new(1, 0)).unwrap().kind, CellKind::Visited);
        assert_eq!(grid.at(Coord::new(0, 1)).unwrap().kind, CellKind::Path);
        // Markers are preserved.
        assert_eq!(grid.at(Coord::new(0, 0)).unwrap().kind, CellKind::Start);
        assert_eq!(grid.at(Coord::new(0, 2)).unwrap().kind, CellKind::End);
    }
}
