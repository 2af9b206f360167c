//! # Game State Module
//!
//! Central session state: the maze, the player, the goal and AI mode.
//!
//! A [`GameSession`] owns its grid outright. Starting a new game builds a new
//! session rather than mutating an old one, so sessions never share grids.

use crate::game::{Autopilot, Direction, GameConfig};
use crate::generation::{generate_maze, GenerationConfig};
use crate::grid::{Coordinate, Grid};
use crate::utils::{find_path, Path};
use crate::{MazeError, MazeResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a game session, used to correlate log lines.
pub type SessionId = Uuid;

/// Whether the session is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// The player has not reached the goal yet
    Playing,
    /// The player stands on the goal
    Reached,
}

/// Generates mazes until `goal` is reachable from `from`, up to `max_attempts` times.
///
/// With the default lattice-aligned start and goal the first maze always
/// qualifies. The retry matters when `from` is a connector cell, which a
/// fresh maze may leave walled in.
///
/// # Errors
///
/// Returns [`MazeError::Configuration`] for invalid dimensions or a zero
/// attempt budget, [`MazeError::InvalidInput`] when `from` or `goal` is out of
/// bounds, and [`MazeError::GenerationFailed`] when every attempt was unreachable.
pub fn generate_reachable_maze<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
    from: Coordinate,
    goal: Coordinate,
    max_attempts: u32,
) -> MazeResult<Grid> {
    if max_attempts == 0 {
        return Err(MazeError::Configuration(
            "at least one generation attempt is required".to_string(),
        ));
    }

    for attempt in 1..=max_attempts {
        let grid = generate_maze(config.rows, config.cols, rng)?;
        if find_path(&grid, from, goal)?.is_some() {
            debug!("Reachable maze found on attempt {}", attempt);
            return Ok(grid);
        }
        warn!(
            "Maze attempt {}/{} leaves {} unreachable from {}",
            attempt, max_attempts, goal, from
        );
    }

    Err(MazeError::GenerationFailed(format!(
        "no maze with {} reachable from {} after {} attempts",
        goal, from, max_attempts
    )))
}

/// A single play-through of one maze.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session identifier
    pub id: SessionId,
    /// Seed the session's random source was created from
    pub seed: u64,
    config: GameConfig,
    rng: StdRng,
    grid: Grid,
    player: Coordinate,
    goal: Coordinate,
    autopilot: Autopilot,
    completion_state: GameCompletionState,
    tick_count: u64,
    move_count: u32,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl GameSession {
    /// Starts a session, seeding from the config or from fresh entropy.
    pub fn new(config: &GameConfig) -> MazeResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        Self::with_seed(config, seed)
    }

    /// Starts a session with an explicit seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::{Coordinate, GameConfig, GameSession};
    ///
    /// let session = GameSession::with_seed(&GameConfig::default(), 7).unwrap();
    /// assert_eq!(session.player(), Coordinate::new(1, 1));
    /// assert_eq!(session.goal(), Coordinate::new(19, 19));
    /// assert!(!session.is_finished());
    /// ```
    pub fn with_seed(config: &GameConfig, seed: u64) -> MazeResult<Self> {
        config.validate()?;

        let generation = config.generation_config(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let player = generation.start();
        let goal = generation.goal();
        let grid = generate_reachable_maze(
            &generation,
            &mut rng,
            player,
            goal,
            config.max_regeneration_attempts,
        )?;

        let session = Self {
            id: Uuid::new_v4(),
            seed,
            config: config.clone(),
            rng,
            grid,
            player,
            goal,
            autopilot: Autopilot::new(),
            completion_state: GameCompletionState::Playing,
            tick_count: 0,
            move_count: 0,
            started_at: Instant::now(),
            finished_at: None,
        };

        info!(
            "Session {} started: {}x{} maze, seed {}",
            session.id, config.rows, config.cols, seed
        );
        Ok(session)
    }

    /// The maze being played.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current player position.
    pub fn player(&self) -> Coordinate {
        self.player
    }

    /// Goal position.
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether AI mode is on.
    pub fn is_ai_mode(&self) -> bool {
        self.autopilot.enabled
    }

    /// Number of ticks processed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Number of cells the player has moved, manually or by autopilot.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current completion state.
    pub fn completion_state(&self) -> GameCompletionState {
        self.completion_state
    }

    /// Checks if the player has reached the goal.
    pub fn is_finished(&self) -> bool {
        self.completion_state == GameCompletionState::Reached
    }

    /// Time since the session started, frozen once the goal is reached.
    pub fn elapsed(&self) -> Duration {
        match self.finished_at {
            Some(finished) => finished.duration_since(self.started_at),
            None => self.started_at.elapsed(),
        }
    }

    /// Moves the player one cell if the target is open.
    ///
    /// Ignored while AI mode is on or after the goal is reached. Returns
    /// whether the player moved.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.autopilot.enabled || self.is_finished() {
            return false;
        }

        let target = self.player + direction.to_delta();
        if !self.grid.is_open(target) {
            return false;
        }

        self.player = target;
        self.move_count += 1;
        true
    }

    /// Toggles AI mode; see [`Autopilot::toggle`].
    pub fn toggle_ai_mode(&mut self) -> MazeResult<bool> {
        if self.is_finished() {
            return Err(MazeError::InvalidState(
                "cannot toggle AI mode after the goal is reached".to_string(),
            ));
        }
        self.autopilot.toggle(&self.grid, self.player, self.goal)
    }

    /// Path the autopilot is following, if AI mode is on.
    pub fn ai_path(&self) -> MazeResult<Option<Path>> {
        self.autopilot.planned_path(&self.grid, self.player, self.goal)
    }

    /// Advances the session by one tick.
    ///
    /// In AI mode the player takes one step along the shortest path. The
    /// session finishes when the player stands on the goal.
    pub fn tick(&mut self) -> MazeResult<()> {
        if self.is_finished() {
            return Err(MazeError::InvalidState(format!(
                "session {} already finished",
                self.id
            )));
        }

        self.tick_count += 1;

        if let Some(next) = self.autopilot.next_step(&self.grid, self.player, self.goal)? {
            self.player = next;
            self.move_count += 1;
        }

        if self.player == self.goal {
            self.completion_state = GameCompletionState::Reached;
            self.finished_at = Some(Instant::now());
            self.autopilot.disable();
            info!(
                "Session {} finished in {:.2}s, {} moves over {} ticks",
                self.id,
                self.elapsed().as_secs_f64(),
                self.move_count,
                self.tick_count
            );
        }

        Ok(())
    }

    /// Replaces the maze, keeping the player where they stand.
    ///
    /// Retries generation up to the configured attempt budget until the goal
    /// is reachable from the player. AI mode is switched off.
    pub fn regenerate(&mut self) -> MazeResult<()> {
        if self.is_finished() {
            return Err(MazeError::InvalidState(
                "cannot regenerate a finished session".to_string(),
            ));
        }

        let generation = self.config.generation_config(self.seed);
        self.grid = generate_reachable_maze(
            &generation,
            &mut self.rng,
            self.player,
            self.goal,
            self.config.max_regeneration_attempts,
        )?;
        self.autopilot.disable();
        info!("Session {} regenerated maze around {}", self.id, self.player);
        Ok(())
    }
}
