//! # Autopilot Module
//!
//! AI mode: walks the player along the A* shortest path, one cell per tick.
//!
//! The grid never changes during a session, but the player may have moved
//! manually since the last tick, so the path is recomputed from the current
//! position every step.

use crate::grid::{Coordinate, Grid};
use crate::utils::{find_path, Path};
use crate::MazeResult;
use log::{debug, info};

/// Autopilot state for AI mode.
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Whether AI mode is currently enabled
    pub enabled: bool,
    /// Number of steps taken since AI mode was last enabled
    pub steps_taken: u32,
}

impl Autopilot {
    /// Creates a disabled autopilot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles AI mode.
    ///
    /// Enabling only succeeds when the goal is reachable from `player`;
    /// disabling always succeeds. Returns the resulting state.
    pub fn toggle(&mut self, grid: &Grid, player: Coordinate, goal: Coordinate) -> MazeResult<bool> {
        if self.enabled {
            self.disable();
        } else if find_path(grid, player, goal)?.is_some() {
            self.enabled = true;
            self.steps_taken = 0;
            info!("AI mode enabled at {}", player);
        } else {
            debug!("AI mode not enabled: no path from {} to {}", player, goal);
        }
        Ok(self.enabled)
    }

    /// Turns AI mode off.
    pub fn disable(&mut self) {
        if self.enabled {
            info!("AI mode disabled after {} steps", self.steps_taken);
        }
        self.enabled = false;
    }

    /// Gets the next cell to step onto, if AI mode is on.
    ///
    /// Returns `None` when disabled, already at the goal, or when no path
    /// exists; the last case also switches AI mode off.
    pub fn next_step(
        &mut self,
        grid: &Grid,
        player: Coordinate,
        goal: Coordinate,
    ) -> MazeResult<Option<Coordinate>> {
        if !self.enabled {
            return Ok(None);
        }

        match find_path(grid, player, goal)? {
            Some(path) => {
                let next = path.get(1).copied();
                if next.is_some() {
                    self.steps_taken += 1;
                }
                Ok(next)
            }
            None => {
                self.disable();
                Ok(None)
            }
        }
    }

    /// The path the autopilot would currently follow, for display.
    pub fn planned_path(
        &self,
        grid: &Grid,
        player: Coordinate,
        goal: Coordinate,
    ) -> MazeResult<Option<Path>> {
        if !self.enabled {
            return Ok(None);
        }
        find_path(grid, player, goal)
    }
}
