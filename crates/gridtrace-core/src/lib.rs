//! **gridtrace-core** — grid model for the gridtrace pathfinding engine.
//!
//! This crate provides the foundational types the search algorithms in
//! `gridtrace-paths` operate on: row/column geometry, the per-cell search
//! state, and the [`Grid`] arena with its editing and run-lifecycle
//! operations.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind, UNREACHABLE};
pub use geom::{Coord, Dims};
pub use grid::{Grid, GridConfig, GridError};
