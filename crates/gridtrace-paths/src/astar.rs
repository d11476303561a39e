//! A* shortest-path search.

use gridtrace_core::{Coord, Grid, GridError, UNREACHABLE};

use crate::distance::manhattan;
use crate::neighbors::neighbors;
use crate::result::{SearchResult, reconstruct_path};

/// Compute the shortest path from `start` to `goal` using A* with the
/// Manhattan heuristic and unit edge costs.
///
/// The grid is annotated in place (`visited`, scores, `predecessor`); run
/// on a [`snapshot`](Grid::snapshot) to keep a grid pristine. Returns the
/// visitation trace and, if the goal was reached, the full start→goal path.
///
/// The open set is kept as a plain vector re-sorted by `f` each pop: the
/// sort is stable, so equal-`f` candidates keep insertion order, which
/// pins the visitation order exactly. Fine at board scale; a heap would
/// reorder ties.
pub fn astar(grid: &mut Grid, start: Coord, goal: Coord) -> Result<SearchResult, GridError> {
    grid.validate()?;
    for c in [start, goal] {
        if !grid.contains(c) {
            return Err(GridError::OutOfBounds(c));
        }
    }

    let mut visited: Vec<Coord> = Vec::new();

    // Initialise the start cell: zero accumulated cost, so f equals h.
    let h = manhattan(start, goal);
    if let Some(cell) = grid.cell_mut(start) {
        cell.distance = 0;
        cell.g_score = 0;
        cell.h_score = h;
        cell.f_score = h;
    }

    let mut open: Vec<Coord> = vec![start];

    while !open.is_empty() {
        open.sort_by_key(|&c| grid.at(c).map_or(UNREACHABLE, |cell| cell.f_score));
        let current = open.remove(0);

        if current == goal {
            let path = reconstruct_path(grid, goal);
            log::debug!(
                "astar: goal {goal} reached, {} cells expanded, path length {}",
                visited.len(),
                path.len()
            );
            return Ok(SearchResult {
                visited,
                path: Some(path),
            });
        }

        let current_g;
        {
            let Some(cell) = grid.cell_mut(current) else {
                continue;
            };
            cell.visited = true;
            current_g = cell.g_score;
            if !cell.kind.is_marker() {
                visited.push(current);
            }
        }

        let tentative = current_g + 1;
        for n in neighbors(grid, current) {
            let goal_h = manhattan(n, goal);
            let Some(cell) = grid.cell_mut(n) else {
                continue;
            };
            // Closed cells are never re-expanded.
            if cell.visited {
                continue;
            }
            if tentative < cell.g_score {
                cell.predecessor = Some(current);
                cell.g_score = tentative;
                cell.h_score = goal_h;
                cell.f_score = tentative + goal_h;
                if !open.contains(&n) {
                    open.push(n);
                }
            }
        }
    }

    log::debug!(
        "astar: open set exhausted after {} expansions, no path to {goal}",
        visited.len()
    );
    Ok(SearchResult {
        visited,
        path: None,
    })
}
