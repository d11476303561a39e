//! Algorithm selection and the caller-facing run entry points.

use std::fmt;
use std::str::FromStr;

use gridtrace_core::{Coord, Grid, GridError};

use crate::astar::astar;
use crate::dfs::dfs;
use crate::dijkstra::dijkstra;
use crate::result::SearchResult;

/// The available search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Dijkstra, Algorithm::Dfs];

    /// The lowercase tag used for parsing and serialization.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Run this algorithm on `grid` from `start` to `goal`.
    ///
    /// The grid is annotated in place; see [`run_snapshot`](Self::run_snapshot)
    /// for the isolating variant.
    pub fn run(
        self,
        grid: &mut Grid,
        start: Coord,
        goal: Coord,
    ) -> Result<SearchResult, GridError> {
        match self {
            Algorithm::AStar => astar(grid, start, goal),
            Algorithm::Dijkstra => dijkstra(grid, start, goal),
            Algorithm::Dfs => dfs(grid, start, goal),
        }
    }

    /// Run this algorithm against a private copy of `grid`.
    ///
    /// Validates the grid, takes a predecessor-free [`snapshot`](Grid::snapshot),
    /// locates the start/end markers and searches the copy. The source grid
    /// is never touched; the returned grid carries the run's annotations
    /// and is what the result's coordinates refer to.
    pub fn run_snapshot(self, grid: &Grid) -> Result<(Grid, SearchResult), GridError> {
        grid.validate()?;
        let mut work = grid.snapshot();
        let start = work.start().ok_or(GridError::MissingStart)?;
        let goal = work.end().ok_or(GridError::MissingEnd)?;
        let result = self.run(&mut work, start, goal)?;
        Ok((work, result))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&Algorithm::AStar).unwrap(),
            "\"astar\""
        );
        assert_eq!(
            serde_json::from_str::<Algorithm>("\"dijkstra\"").unwrap(),
            Algorithm::Dijkstra
        );
    }
}
