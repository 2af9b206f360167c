//! # Scene Management System
//!
//! Drives the menu, the game and the ending screen from one loop. Game logic
//! advances at a fixed tick rate independent of the frame rate.

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, PlayerInput};
use crate::rendering::MacroquadDisplay;
use crate::MazeResult;
use log::{info, warn};
use macroquad::prelude::*;
use std::time::Duration;

/// Represents the current scene in the game
#[derive(Debug, Clone, PartialEq)]
pub enum SceneType {
    /// Title screen with the start button
    MainMenu,
    /// Normal gameplay
    Playing,
    /// Goal reached; shows the final time
    Finished { total: Duration },
}

/// Most ticks a single frame may replay after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 3;

/// Converts frame time into whole game ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_length: f32,
    accumulated: f32,
}

impl TickClock {
    /// Creates a clock producing `ticks_per_second` ticks.
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            tick_length: 1.0 / ticks_per_second.max(1) as f32,
            accumulated: 0.0,
        }
    }

    /// Adds elapsed frame time and returns how many ticks are due.
    ///
    /// Time beyond [`MAX_CATCH_UP_TICKS`] ticks is dropped, so a long stall
    /// does not move the player several cells in one frame.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        let limit = self.tick_length * (MAX_CATCH_UP_TICKS as f32 + 0.5);
        self.accumulated = (self.accumulated + frame_time.max(0.0)).min(limit);
        let mut ticks = 0;
        while self.accumulated >= self.tick_length {
            self.accumulated -= self.tick_length;
            ticks += 1;
        }
        ticks
    }

    /// Drops any partially accumulated tick.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    config: GameConfig,
    session: Option<GameSession>,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    clock: TickClock,
}

impl SceneManager {
    /// Creates a new scene manager starting at the main menu
    pub fn new(config: GameConfig, input_handler: InputHandler) -> Self {
        let clock = TickClock::new(config.ticks_per_second);
        Self {
            current_scene: SceneType::MainMenu,
            config,
            session: None,
            display: MacroquadDisplay::new(screen_width(), screen_height()),
            input_handler,
            clock,
        }
    }

    /// Runs the main scene loop until the game exits
    pub async fn run(&mut self) -> MazeResult<()> {
        loop {
            self.display.resize_to_screen();
            let exit = match self.current_scene.clone() {
                SceneType::MainMenu => self.update_main_menu()?,
                SceneType::Playing => self.update_playing_scene()?,
                SceneType::Finished { total } => self.update_finished_scene(total),
            };
            if exit {
                break;
            }
            next_frame().await;
        }
        info!("Scene loop ended");
        Ok(())
    }

    /// Updates the main menu, returns true if exit is requested
    fn update_main_menu(&mut self) -> MazeResult<bool> {
        let start_button = self.display.ui.render_main_menu();
        let commands = self.input_handler.pressed_commands();

        if commands.contains(&PlayerInput::Quit) {
            return Ok(true);
        }

        let clicked = is_mouse_button_pressed(MouseButton::Left)
            && start_button.contains(mouse_position().into());
        if clicked || commands.contains(&PlayerInput::Confirm) {
            self.start_new_game()?;
        }
        Ok(false)
    }

    /// Updates the playing scene, returns true if exit is requested
    fn update_playing_scene(&mut self) -> MazeResult<bool> {
        let Some(session) = self.session.as_mut() else {
            self.current_scene = SceneType::MainMenu;
            return Ok(false);
        };

        for command in self.input_handler.pressed_commands() {
            match command {
                PlayerInput::Quit => return Ok(true),
                PlayerInput::ToggleAi => {
                    let enabled = session.toggle_ai_mode()?;
                    self.display.add_message(if enabled {
                        "AI mode on (A to toggle off)".to_string()
                    } else {
                        "AI mode off".to_string()
                    });
                }
                PlayerInput::Regenerate => match session.regenerate() {
                    Ok(()) => self.display.add_message("New maze generated".to_string()),
                    Err(e) => {
                        warn!("Regeneration failed: {}", e);
                        self.display.add_message(format!("Could not regenerate: {}", e));
                    }
                },
                PlayerInput::Move(_) | PlayerInput::Confirm => {}
            }
        }

        for _ in 0..self.clock.advance(get_frame_time()) {
            for direction in self.input_handler.held_directions() {
                session.move_player(direction);
            }
            session.tick()?;
            if session.is_finished() {
                self.current_scene = SceneType::Finished {
                    total: session.elapsed(),
                };
                break;
            }
        }

        self.display.render_game(session)?;
        Ok(false)
    }

    /// Updates the finished scene, returns true if exit is requested
    fn update_finished_scene(&mut self, total: Duration) -> bool {
        self.display.ui.render_ending_screen(total);

        if self.input_handler.pressed_commands().contains(&PlayerInput::Quit) {
            return true;
        }
        if self.input_handler.any_key_pressed() {
            self.session = None;
            self.current_scene = SceneType::MainMenu;
        }
        false
    }

    /// Starts a new game with a fresh maze
    fn start_new_game(&mut self) -> MazeResult<()> {
        let session = GameSession::new(&self.config)?;
        info!("Starting session {} with seed {}", session.id, session.seed);

        self.display.clear_messages();
        self.clock.reset();
        self.session = Some(session);
        self.current_scene = SceneType::Playing;
        Ok(())
    }
}
