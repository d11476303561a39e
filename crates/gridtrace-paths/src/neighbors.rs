//! Neighbor enumeration over a [`Grid`].

use gridtrace_core::{CellKind, Coord, Grid};

/// The walkable 4-neighbors of `c`: in bounds and not walls, in fixed
/// **up, right, down, left** order.
///
/// The order is part of the contract: it is the tie-breaker that makes
/// traversal order reproducible across runs.
pub fn neighbors(grid: &Grid, c: Coord) -> Vec<Coord> {
    c.neighbors4()
        .into_iter()
        .filter(|&n| grid.at(n).is_some_and(|cell| cell.kind != CellKind::Wall))
        .collect()
}

/// Whether any 4-neighbor of `c` currently has kind `Path`.
///
/// Used for decorative highlighting of cells touching a finished path;
/// off-grid neighbors are safely ignored.
pub fn is_adjacent_to_path(grid: &Grid, c: Coord) -> bool {
    c.neighbors4()
        .into_iter()
        .any(|n| grid.at(n).is_some_and(|cell| cell.kind == CellKind::Path))
}
