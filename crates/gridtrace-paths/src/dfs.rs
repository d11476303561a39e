//! Depth-first search.

use gridtrace_core::{Coord, Grid, GridError};

use crate::neighbors::neighbors;
use crate::result::{SearchResult, reconstruct_path};

/// Depth-first traversal from `start` toward `goal`.
///
/// Cells are marked visited when **pushed**, not when popped, so a cell
/// can never sit on the stack twice; its `predecessor` is assigned at the
/// same moment. The returned path is whatever chain the traversal reaches
/// the goal by first: connectivity is answered exactly, path length is
/// not optimal.
pub fn dfs(grid: &mut Grid, start: Coord, goal: Coord) -> Result<SearchResult, GridError> {
    grid.validate()?;
    for c in [start, goal] {
        if !grid.contains(c) {
            return Err(GridError::OutOfBounds(c));
        }
    }

    let mut visited: Vec<Coord> = Vec::new();
    let mut stack: Vec<Coord> = vec![start];
    if let Some(cell) = grid.cell_mut(start) {
        cell.visited = true;
    }

    while let Some(current) = stack.pop() {
        if current == goal {
            let path = reconstruct_path(grid, goal);
            log::debug!(
                "dfs: goal {goal} reached, {} cells traversed, path length {}",
                visited.len(),
                path.len()
            );
            return Ok(SearchResult {
                visited,
                path: Some(path),
            });
        }

        if let Some(cell) = grid.at(current) {
            if !cell.kind.is_marker() {
                visited.push(current);
            }
        }

        for n in neighbors(grid, current) {
            let Some(cell) = grid.cell_mut(n) else {
                continue;
            };
            if !cell.visited {
                cell.visited = true;
                cell.predecessor = Some(current);
                stack.push(n);
            }
        }
    }

    log::debug!(
        "dfs: stack exhausted after {} cells, no path to {goal}",
        visited.len()
    );
    Ok(SearchResult {
        visited,
        path: None,
    })
}
