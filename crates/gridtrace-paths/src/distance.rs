use gridtrace_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// This is the A* heuristic: admissible and consistent for 4-directional
/// unit-cost movement.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}
