//! The [`Cell`] type — one grid position with its search state.

use crate::geom::Coord;

/// Sentinel cost meaning "not yet reached" in search state.
pub const UNREACHABLE: u32 = u32::MAX;

/// What a cell currently is on the board.
///
/// Exactly one cell has kind `Start` and exactly one has kind `End` in a
/// valid grid. `Visited` and `Path` are presentation kinds stamped onto a
/// grid from a finished search result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Path,
}

impl CellKind {
    /// Whether this is one of the two endpoint markers.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }
}

/// A single grid cell.
///
/// The coordinate is fixed at creation. The search fields (`visited`,
/// `distance`, the A* scores and `predecessor`) are written by a running
/// algorithm and reset between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord: Coord,
    pub kind: CellKind,
    pub visited: bool,
    /// Cost-so-far for Dijkstra.
    pub distance: u32,
    /// A* accumulated cost from the start.
    pub g_score: u32,
    /// A* heuristic estimate to the goal.
    pub h_score: u32,
    /// A* priority: `g + h`.
    pub f_score: u32,
    /// The coordinate this cell was reached from during a search, forming
    /// a backward chain to the start cell. Assigned only toward
    /// already-processed cells, so the chain cannot cycle.
    pub predecessor: Option<Coord>,
}

impl Cell {
    /// Create an empty cell at `coord` with pristine search state.
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            kind: CellKind::Empty,
            visited: false,
            distance: UNREACHABLE,
            g_score: UNREACHABLE,
            h_score: UNREACHABLE,
            f_score: UNREACHABLE,
            predecessor: None,
        }
    }

    /// Reset every search field to its pristine value, leaving `kind`
    /// untouched.
    pub fn reset_search(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.g_score = UNREACHABLE;
        self.h_score = UNREACHABLE;
        self.f_score = UNREACHABLE;
        self.predecessor = None;
    }
}
