//! # Maze Explorer
//!
//! A maze game where the player, or an A* driven autopilot, walks from the
//! top-left corner of a randomly generated maze to the bottom-right corner.
//!
//! ## Architecture Overview
//!
//! The crate is split into a small algorithmic core and a thin shell around it:
//!
//! - **Grid**: passive rectangular grid of open and blocked cells
//! - **Generation**: randomized depth-first carving that always yields a perfect maze
//! - **Pathfinding**: A* search over the 4-connected grid graph
//! - **Game**: headless session state (player, goal, AI mode, timing)
//! - **Rendering / Scenes / Input**: the macroquad front end
//!
//! The core functions take everything they need as arguments (including the
//! random source) and return fresh values, so separate sessions never share
//! mutable state.
//!
//! ```
//! use maze_explorer::{find_path, generate_maze, Coordinate};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let grid = generate_maze(21, 21, &mut rng).unwrap();
//! let path = find_path(&grid, Coordinate::new(1, 1), Coordinate::new(19, 19))
//!     .unwrap()
//!     .expect("generated mazes are fully connected");
//! assert_eq!(path.first(), Some(&Coordinate::new(1, 1)));
//! assert_eq!(path.last(), Some(&Coordinate::new(19, 19)));
//! ```

pub mod game;
pub mod generation;
pub mod grid;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use grid::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use utils::*;

/// Core error type for the maze engine.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Grid dimensions or configuration values are unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller passed coordinates or requests the grid cannot satisfy
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Game session is in a state that does not allow the operation
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the maze explorer codebase.
pub type MazeResult<T> = Result<T, MazeError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default maze height in cells
    pub const DEFAULT_ROWS: usize = 21;

    /// Default maze width in cells
    pub const DEFAULT_COLS: usize = 21;

    /// Smallest maze that still has a lattice node surrounded by walls
    pub const MIN_DIMENSION: usize = 3;

    /// Game ticks per second; the autopilot takes one step per tick
    pub const TICKS_PER_SECOND: u32 = 10;

    /// Upper bound on maze regeneration attempts before giving up
    pub const MAX_REGENERATION_ATTEMPTS: u32 = 16;

    /// Window width in pixels
    pub const WINDOW_WIDTH: f32 = 600.0;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: f32 = 600.0;
}
