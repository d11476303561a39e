//! Grid search algorithms for the gridtrace pathfinding engine.
//!
//! This crate provides the three search strategies a caller can replay on
//! a board, plus the grid utilities they share:
//!
//! - **A\*** shortest-path search ([`astar`])
//! - **Dijkstra** shortest-path search ([`dijkstra`])
//! - **Depth-First Search** connectivity traversal ([`dfs`])
//!
//! Each strategy consumes a grid and two endpoints and produces a
//! [`SearchResult`]: the cells it expanded, in order, and the
//! reconstructed start→goal path when one exists. Algorithms annotate the
//! grid they are handed; callers that keep a board pristine run against a
//! [`Grid::snapshot`](gridtrace_core::Grid::snapshot), most conveniently
//! via [`Algorithm::run_snapshot`].
//!
//! | Strategy | Shortest path | Selection rule |
//! |---|---|---|
//! | [`astar`] | yes | minimum `f = g + manhattan`, stable on ties |
//! | [`dijkstra`] | yes | minimum `distance`, stable on ties |
//! | [`dfs`] | no | stack order |

mod algorithm;
mod astar;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod result;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use neighbors::{is_adjacent_to_path, neighbors};
pub use result::{SearchResult, reconstruct_path, sort_by_distance};
