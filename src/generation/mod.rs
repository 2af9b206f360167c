//! # Generation Module
//!
//! Procedural maze generation.
//!
//! Mazes are carved on a half-resolution lattice: only cells whose row and
//! column are both odd can be carving positions, and the cells between them
//! are walls until a carving step knocks one out. This is why both grid
//! dimensions must be odd.

pub mod maze;

pub use maze::*;

use crate::config::{DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
use crate::grid::{Coordinate, Grid};
use crate::{MazeError, MazeResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for maze generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid height in cells (odd, at least 3)
    pub rows: usize,
    /// Grid width in cells (odd, at least 3)
    pub cols: usize,
}

impl GenerationConfig {
    /// Creates a configuration for the default 21x21 maze.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.rows % 2, 1);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }

    /// Creates a configuration with explicit dimensions.
    pub fn with_size(seed: u64, rows: usize, cols: usize) -> Self {
        Self { seed, rows, cols }
    }

    /// Creates a configuration for testing with a small maze.
    pub fn for_testing(seed: u64) -> Self {
        Self::with_size(seed, 7, 9)
    }

    /// Checks the dimension preconditions of the carving algorithm.
    pub fn validate(&self) -> MazeResult<()> {
        validate_dimensions(self.rows, self.cols)
    }

    /// Top-left lattice node, where carving and the player start.
    pub fn start(&self) -> Coordinate {
        Coordinate::new(1, 1)
    }

    /// Bottom-right lattice node, the default goal.
    pub fn goal(&self) -> Coordinate {
        Coordinate::new(self.rows as i32 - 2, self.cols as i32 - 2)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Rejects even or too-small dimensions.
///
/// Odd sizes keep the outermost lattice nodes one cell away from the border,
/// so the border always stays a wall.
pub fn validate_dimensions(rows: usize, cols: usize) -> MazeResult<()> {
    for (name, value) in [("rows", rows), ("cols", cols)] {
        if value < MIN_DIMENSION {
            return Err(MazeError::Configuration(format!(
                "{} must be at least {}, got {}",
                name, MIN_DIMENSION, value
            )));
        }
        if value % 2 == 0 {
            return Err(MazeError::Configuration(format!(
                "{} must be odd, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> MazeResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> MazeResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use pathfinding::prelude::bfs_reach;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Number of lattice nodes (odd, odd cells) in a grid of the given size.
    pub fn lattice_node_count(rows: usize, cols: usize) -> usize {
        (rows / 2) * (cols / 2)
    }

    /// Returns true when both coordinates are odd.
    pub fn is_lattice_node(coordinate: Coordinate) -> bool {
        coordinate.row % 2 == 1 && coordinate.col % 2 == 1
    }

    /// Validates that a grid is a perfect maze over its full lattice.
    ///
    /// Checks, in order: the border is walled, no `(even, even)` cell is open,
    /// every lattice node is open, every open cell is reachable from `(1, 1)`,
    /// and the open cells form a tree (one fewer connector than lattice nodes).
    pub fn validate_maze(grid: &Grid) -> MazeResult<()> {
        validate_dimensions(grid.rows(), grid.cols())?;

        let last_row = grid.rows() as i32 - 1;
        let last_col = grid.cols() as i32 - 1;
        for coordinate in grid.open_cells() {
            if coordinate.row == 0
                || coordinate.col == 0
                || coordinate.row == last_row
                || coordinate.col == last_col
            {
                return Err(MazeError::GenerationFailed(format!(
                    "border cell {} is open",
                    coordinate
                )));
            }
            if coordinate.row % 2 == 0 && coordinate.col % 2 == 0 {
                return Err(MazeError::GenerationFailed(format!(
                    "wall pillar {} is open",
                    coordinate
                )));
            }
        }

        let lattice_nodes = lattice_node_count(grid.rows(), grid.cols());
        let open_count = grid.open_cells().count();
        let lattice_open = grid.open_cells().filter(|&c| is_lattice_node(c)).count();
        if lattice_open != lattice_nodes {
            return Err(MazeError::GenerationFailed(format!(
                "only {} of {} lattice nodes are open",
                lattice_open, lattice_nodes
            )));
        }

        let reachable = bfs_reach(Coordinate::new(1, 1), |&c| grid.open_neighbors(c)).count();
        if reachable != open_count {
            return Err(MazeError::GenerationFailed(format!(
                "{} of {} open cells are unreachable from (1, 1)",
                open_count - reachable,
                open_count
            )));
        }

        // A spanning tree over n lattice nodes carves exactly n - 1 connectors
        if open_count != 2 * lattice_nodes - 1 {
            return Err(MazeError::GenerationFailed(format!(
                "maze contains a cycle: {} open cells for {} lattice nodes",
                open_count, lattice_nodes
            )));
        }

        Ok(())
    }
}
