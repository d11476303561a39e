//! Dijkstra shortest-path search with unit edge weights.

use gridtrace_core::{Coord, Grid, GridError, UNREACHABLE};

use crate::neighbors::neighbors;
use crate::result::{SearchResult, reconstruct_path, sort_by_distance};

/// Compute the shortest path from `start` to `goal` with Dijkstra's
/// algorithm.
///
/// Every cell of the grid (walls included) is enqueued upfront; walls
/// simply never receive a finite distance. Per iteration the unvisited
/// list is stably re-sorted by `distance` and the front popped. A front
/// cell still at [`UNREACHABLE`] means nothing left is connected to the
/// start, so the search ends without a path.
///
/// Relaxation is the textbook rule: a neighbor's distance and predecessor
/// are updated only when the route through the current cell is strictly
/// shorter.
pub fn dijkstra(grid: &mut Grid, start: Coord, goal: Coord) -> Result<SearchResult, GridError> {
    grid.validate()?;
    for c in [start, goal] {
        if !grid.contains(c) {
            return Err(GridError::OutOfBounds(c));
        }
    }

    let mut visited: Vec<Coord> = Vec::new();

    if let Some(cell) = grid.cell_mut(start) {
        cell.distance = 0;
    }

    let mut unvisited: Vec<Coord> = grid.coords().collect();

    while !unvisited.is_empty() {
        sort_by_distance(grid, &mut unvisited);
        let closest = unvisited.remove(0);
        let current_d = grid.at(closest).map_or(UNREACHABLE, |cell| cell.distance);

        // Everything still enqueued is cut off from the start.
        if current_d == UNREACHABLE {
            log::debug!(
                "dijkstra: frontier dry after {} expansions, no path to {goal}",
                visited.len()
            );
            return Ok(SearchResult {
                visited,
                path: None,
            });
        }

        {
            let Some(cell) = grid.cell_mut(closest) else {
                continue;
            };
            cell.visited = true;
            if !cell.kind.is_marker() {
                visited.push(closest);
            }
        }

        if closest == goal {
            let path = reconstruct_path(grid, goal);
            log::debug!(
                "dijkstra: goal {goal} reached at distance {current_d}, {} cells expanded",
                visited.len()
            );
            return Ok(SearchResult {
                visited,
                path: Some(path),
            });
        }

        let tentative = current_d + 1;
        for n in neighbors(grid, closest) {
            let Some(cell) = grid.cell_mut(n) else {
                continue;
            };
            if cell.visited {
                continue;
            }
            if tentative < cell.distance {
                cell.distance = tentative;
                cell.predecessor = Some(closest);
            }
        }
    }

    Ok(SearchResult {
        visited,
        path: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::CellKind;

    fn grid3x3() -> (Grid, Coord, Coord) {
        let mut g = Grid::new(3, 3).unwrap();
        let s = Coord::new(1, 0);
        let e = Coord::new(1, 2);
        g.set_kind(s, CellKind::Start);
        g.set_kind(e, CellKind::End);
        (g, s, e)
    }

    #[test]
    fn straight_line_on_open_grid() {
        let (mut grid, s, e) = grid3x3();
        let result = dijkstra(&mut grid, s, e).unwrap();
        assert_eq!(
            result.path,
            Some(vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)])
        );
        assert!(!result.visited.contains(&s));
        assert!(!result.visited.contains(&e));
    }

    #[test]
    fn visits_spread_in_distance_order() {
        let (mut grid, s, e) = grid3x3();
        let result = dijkstra(&mut grid, s, e).unwrap();
        // Distances along the trace never decrease.
        let dist = |c: Coord| grid.at(c).unwrap().distance;
        for pair in result.visited.windows(2) {
            assert!(dist(pair[0]) <= dist(pair[1]));
        }
    }

    #[test]
    fn corridor_between_walls() {
        let (mut grid, s, e) = grid3x3();
        grid.toggle_wall(Coord::new(0, 1));
        grid.toggle_wall(Coord::new(2, 1));
        let result = dijkstra(&mut grid, s, e).unwrap();
        assert_eq!(
            result.path,
            Some(vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)])
        );
    }

    #[test]
    fn start_equals_goal() {
        let (mut grid, s, _) = grid3x3();
        let result = dijkstra(&mut grid, s, s).unwrap();
        assert_eq!(result.path, Some(vec![s]));
        assert!(result.visited.is_empty());
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let (mut grid, s, e) = grid3x3();
        grid.toggle_wall(Coord::new(0, 2));
        grid.toggle_wall(Coord::new(1, 1));
        grid.toggle_wall(Coord::new(2, 2));
        let result = dijkstra(&mut grid, s, e).unwrap();
        assert_eq!(result.path, None);
        assert!(!result.visited.is_empty());
    }

    #[test]
    fn matches_astar_path_length_with_detour() {
        let mut grid = Grid::new(5, 5).unwrap();
        let s = Coord::new(2, 0);
        let e = Coord::new(2, 4);
        grid.set_kind(s, CellKind::Start);
        grid.set_kind(e, CellKind::End);
        for row in 0..4 {
            grid.toggle_wall(Coord::new(row, 2));
        }
        let d = dijkstra(&mut grid.snapshot(), s, e).unwrap();
        let a = crate::astar(&mut grid.snapshot(), s, e).unwrap();
        assert_eq!(
            d.path.as_ref().map(Vec::len),
            a.path.as_ref().map(Vec::len)
        );
        assert_eq!(d.path.unwrap().len(), 9);
    }

    #[test]
    fn rejects_markerless_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        let err = dijkstra(&mut grid, Coord::new(0, 0), Coord::new(1, 1)).unwrap_err();
        assert_eq!(err, GridError::MissingStart);
    }
}
