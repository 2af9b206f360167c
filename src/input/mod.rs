//! # Input Module
//!
//! Keyboard handling for the macroquad front end.

use crate::game::Direction;
use macroquad::prelude::*;

/// Player input types that can be processed by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Step one cell in a direction
    Move(Direction),
    /// Toggle AI mode
    ToggleAi,
    /// Replace the maze, keeping the player in place
    Regenerate,
    /// Confirm (start a game from the menu)
    Confirm,
    /// Quit the game
    Quit,
}

/// Input handler for processing player commands.
///
/// Movement uses the arrow keys only and is read as held keys, so keeping an
/// arrow pressed walks one cell per tick. Letter keys are commands that fire
/// once per press: `A` toggles AI mode and `R` regenerates the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Maps a movement key to its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use macroquad::prelude::KeyCode;
    /// use maze_explorer::{Direction, InputHandler};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(input_handler.movement_for_key(KeyCode::Left), Some(Direction::Left));
    /// assert_eq!(input_handler.movement_for_key(KeyCode::A), None);
    /// ```
    pub fn movement_for_key(&self, key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Maps a command key to its input.
    pub fn command_for_key(&self, key: KeyCode) -> Option<PlayerInput> {
        match key {
            KeyCode::A => Some(PlayerInput::ToggleAi),
            KeyCode::R => Some(PlayerInput::Regenerate),
            KeyCode::Enter | KeyCode::Space => Some(PlayerInput::Confirm),
            KeyCode::Escape => Some(PlayerInput::Quit),
            _ => None,
        }
    }

    /// Directions whose keys are currently held, in [`Direction::ALL`] order.
    pub fn held_directions(&self) -> Vec<Direction> {
        let held: Vec<Direction> = get_keys_down()
            .into_iter()
            .filter_map(|key| self.movement_for_key(key))
            .collect();
        Direction::ALL
            .into_iter()
            .filter(|direction| held.contains(direction))
            .collect()
    }

    /// Command inputs for keys pressed since the last frame.
    pub fn pressed_commands(&self) -> Vec<PlayerInput> {
        get_keys_pressed()
            .into_iter()
            .filter_map(|key| self.command_for_key(key))
            .collect()
    }

    /// Returns true when any key was pressed this frame.
    pub fn any_key_pressed(&self) -> bool {
        get_last_key_pressed().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move() {
        let handler = InputHandler::new();
        assert_eq!(handler.movement_for_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(handler.movement_for_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(handler.movement_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(handler.movement_for_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_every_direction_has_exactly_one_key() {
        let handler = InputHandler::new();
        let keys = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];
        for direction in Direction::ALL {
            let bound = keys
                .iter()
                .filter(|&&key| handler.movement_for_key(key) == Some(direction))
                .count();
            assert_eq!(bound, 1, "{:?}", direction);
        }
    }

    #[test]
    fn test_letter_keys_are_commands_not_moves() {
        let handler = InputHandler::new();
        for key in [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D, KeyCode::R] {
            assert_eq!(handler.movement_for_key(key), None, "{:?}", key);
        }
        assert_eq!(handler.command_for_key(KeyCode::A), Some(PlayerInput::ToggleAi));
        assert_eq!(handler.command_for_key(KeyCode::W), None);
    }

    #[test]
    fn test_command_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.command_for_key(KeyCode::R), Some(PlayerInput::Regenerate));
        assert_eq!(handler.command_for_key(KeyCode::Enter), Some(PlayerInput::Confirm));
        assert_eq!(handler.command_for_key(KeyCode::Escape), Some(PlayerInput::Quit));
        assert_eq!(handler.command_for_key(KeyCode::Up), None);
    }
}
