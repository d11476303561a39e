//! The [`Grid`] type — a rectangular cell arena with value semantics.
//!
//! A `Grid` owns its cells outright: cloning produces an independent copy.
//! The editing surface (wall painting, marker relocation) mutates a grid in
//! place; a search runs on a private copy obtained via
//! [`snapshot`](Grid::snapshot), so the grid being edited and the grid being
//! explored never alias.

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::geom::{Coord, Dims, DimsIter};

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Configuration for creating a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
}

impl Default for GridConfig {
    /// The standard 20×30 board.
    fn default() -> Self {
        Self { rows: 20, cols: 30 }
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// A precondition violation in grid construction or validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Zero or negative dimensions.
    Empty { rows: i32, cols: i32 },
    /// No cell has kind `Start`.
    MissingStart,
    /// No cell has kind `End`.
    MissingEnd,
    /// More than one cell has kind `Start`.
    MultipleStarts(usize),
    /// More than one cell has kind `End`.
    MultipleEnds(usize),
    /// A coordinate lies outside the grid.
    OutOfBounds(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::MissingStart => f.write_str("grid has no start cell"),
            Self::MissingEnd => f.write_str("grid has no end cell"),
            Self::MultipleStarts(n) => write!(f, "grid has {n} start cells"),
            Self::MultipleEnds(n) => write!(f, "grid has {n} end cells"),
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Cell`]s in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell empty.
    ///
    /// Rejects non-positive dimensions: a degenerate board has no valid
    /// start/end placement and would send a search into an infinite loop.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::Empty { rows, cols });
        }
        let cells = dims.iter().map(Cell::new).collect();
        Ok(Self { dims, cells })
    }

    /// Create a grid with the default start/end markers placed: start at
    /// `(rows/2, cols/5)`, end at `(rows/2, 4*cols/5)`.
    pub fn initial(cfg: GridConfig) -> Result<Self, GridError> {
        let mut grid = Self::new(cfg.rows, cfg.cols)?;
        grid.set_kind(Coord::new(cfg.rows / 2, cfg.cols / 5), CellKind::Start);
        grid.set_kind(
            Coord::new(cfg.rows / 2, cfg.cols * 4 / 5),
            CellKind::End,
        );
        Ok(grid)
    }

    /// The grid's dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Read the cell at `c`. Returns `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Mutable access to the cell at `c`. Returns `None` if out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        self.dims.index(c).map(|i| &mut self.cells[i])
    }

    /// Row-major iterator over every coordinate (the flat cell sequence
    /// Dijkstra's unvisited scan starts from).
    #[inline]
    pub fn coords(&self) -> DimsIter {
        self.dims.iter()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().map(|cell| (cell.coord, *cell))
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Set the kind of the cell at `c`. No-op if out of bounds.
    pub fn set_kind(&mut self, c: Coord, kind: CellKind) {
        if let Some(cell) = self.cell_mut(c) {
            cell.kind = kind;
        }
    }

    /// Toggle a wall at `c` (wall becomes empty, anything else non-marker
    /// becomes wall). Markers are left alone.
    pub fn toggle_wall(&mut self, c: Coord) {
        if let Some(cell) = self.cell_mut(c) {
            cell.kind = match cell.kind {
                CellKind::Wall => CellKind::Empty,
                k if k.is_marker() => k,
                _ => CellKind::Wall,
            };
        }
    }

    /// Paint a wall at `c` unconditionally (drag painting). Markers are
    /// left alone.
    pub fn paint_wall(&mut self, c: Coord) {
        if let Some(cell) = self.cell_mut(c) {
            if !cell.kind.is_marker() {
                cell.kind = CellKind::Wall;
            }
        }
    }

    /// Move the start marker to `c`, emptying its old position.
    ///
    /// Refuses to land on the end marker: the grid must keep exactly one
    /// of each. No-op if `c` is out of bounds.
    pub fn move_start(&mut self, c: Coord) {
        self.move_marker(c, CellKind::Start, CellKind::End);
    }

    /// Move the end marker to `c`, emptying its old position.
    ///
    /// Refuses to land on the start marker. No-op if `c` is out of bounds.
    pub fn move_end(&mut self, c: Coord) {
        self.move_marker(c, CellKind::End, CellKind::Start);
    }

    fn move_marker(&mut self, c: Coord, kind: CellKind, other: CellKind) {
        let Some(target) = self.at(c) else {
            return;
        };
        if target.kind == other {
            return;
        }
        if let Some(old) = self.find_kind(kind) {
            self.set_kind(old, CellKind::Empty);
        }
        self.set_kind(c, kind);
    }

    /// The coordinate of the start marker, if present.
    pub fn start(&self) -> Option<Coord> {
        self.find_kind(CellKind::Start)
    }

    /// The coordinate of the end marker, if present.
    pub fn end(&self) -> Option<Coord> {
        self.find_kind(CellKind::End)
    }

    fn find_kind(&self, kind: CellKind) -> Option<Coord> {
        self.cells.iter().find(|cell| cell.kind == kind).map(|cell| cell.coord)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check the one-start/one-end invariant.
    pub fn validate(&self) -> Result<(), GridError> {
        let starts = self.cells.iter().filter(|c| c.kind == CellKind::Start).count();
        let ends = self.cells.iter().filter(|c| c.kind == CellKind::End).count();
        match starts {
            0 => return Err(GridError::MissingStart),
            1 => {}
            n => return Err(GridError::MultipleStarts(n)),
        }
        match ends {
            0 => Err(GridError::MissingEnd),
            1 => Ok(()),
            n => Err(GridError::MultipleEnds(n)),
        }
    }

    // -----------------------------------------------------------------------
    // Run lifecycle
    // -----------------------------------------------------------------------

    /// Reset every cell's search state and repaint `Visited`/`Path` cells
    /// back to `Empty`, readying the grid for the next run.
    pub fn clear_search(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
            if matches!(cell.kind, CellKind::Visited | CellKind::Path) {
                cell.kind = CellKind::Empty;
            }
        }
    }

    /// Deep copy with every `predecessor` stripped.
    ///
    /// A search run mutates the copy it is handed; stripping the back-links
    /// here guarantees the copy holds no chain from a previous run.
    pub fn snapshot(&self) -> Grid {
        let mut copy = self.clone();
        for cell in &mut copy.cells {
            cell.predecessor = None;
        }
        copy
    }
}
