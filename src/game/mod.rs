//! # Game Module
//!
//! Headless game session management.
//!
//! This module contains everything about a play session that does not need
//! a window:
//! - Session configuration and loading it from JSON
//! - Session state (player, goal, timing, completion)
//! - The autopilot that walks the A* path in AI mode

pub mod autopilot;
pub mod config;
pub mod state;

pub use autopilot::*;
pub use config::*;
pub use state::*;

use crate::grid::Coordinate;
use serde::{Deserialize, Serialize};

/// Orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order held keys are applied each tick.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Converts a direction to a `(row, col)` delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::{Coordinate, Direction};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Coordinate::new(-1, 0));
    /// ```
    pub fn to_delta(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(-1, 0),
            Direction::Down => Coordinate::new(1, 0),
            Direction::Left => Coordinate::new(0, -1),
            Direction::Right => Coordinate::new(0, 1),
        }
    }

    /// Converts a unit delta back to a direction.
    pub fn from_delta(delta: Coordinate) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.to_delta() == delta)
    }

    /// Direction of a single step between two adjacent coordinates.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        Self::from_delta(to - from)
    }
}
