//! # Display Management
//!
//! Draws a running game session: maze, AI path, player, goal and timer.

use crate::game::GameSession;
use crate::grid::{Cell, Coordinate};
use crate::rendering::{palette, UI};
use crate::MazeResult;
use macroquad::prelude::*;

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Status messages shown under the timer
    pub messages: Vec<String>,
    /// Maximum number of messages to keep
    pub max_messages: usize,
    /// Menu and ending screens
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display for a screen of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_explorer::MacroquadDisplay;
    ///
    /// let display = MacroquadDisplay::new(600.0, 600.0);
    /// assert_eq!(display.cell_size(21, 21), 600.0 / 21.0);
    /// ```
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            messages: Vec::new(),
            max_messages: 3,
            ui: UI::new(screen_width, screen_height),
        }
    }

    /// Picks up the current window size.
    pub fn resize_to_screen(&mut self) {
        self.screen_width = screen_width();
        self.screen_height = screen_height();
        self.ui = UI::new(self.screen_width, self.screen_height);
    }

    /// Side length of a square cell so the whole maze fits on screen.
    pub fn cell_size(&self, rows: usize, cols: usize) -> f32 {
        let by_width = self.screen_width / cols.max(1) as f32;
        let by_height = self.screen_height / rows.max(1) as f32;
        by_width.min(by_height)
    }

    /// Renders the complete game screen.
    pub fn render_game(&self, session: &GameSession) -> MazeResult<()> {
        clear_background(palette::BACKGROUND);

        let grid = session.grid();
        let cell_size = self.cell_size(grid.rows(), grid.cols());

        for coordinate in grid.coordinates() {
            let color = match grid.cell(coordinate) {
                Some(Cell::Open) => palette::CORRIDOR,
                _ => palette::BACKGROUND,
            };
            self.fill_cell(coordinate, cell_size, color);
        }

        if let Some(path) = session.ai_path()? {
            for &coordinate in &path {
                self.fill_cell(coordinate, cell_size, palette::PATH);
            }
        }

        self.fill_cell(session.player(), cell_size, palette::PLAYER);
        self.fill_cell(session.goal(), cell_size, palette::GOAL);

        self.render_timer(session);
        self.render_messages();
        Ok(())
    }

    fn fill_cell(&self, coordinate: Coordinate, cell_size: f32, color: Color) {
        draw_rectangle(
            coordinate.col as f32 * cell_size,
            coordinate.row as f32 * cell_size,
            cell_size,
            cell_size,
            color,
        );
    }

    fn render_timer(&self, session: &GameSession) {
        let mut label = format!("Time: {:.2} sec", session.elapsed().as_secs_f64());
        if session.is_ai_mode() {
            label.push_str("  [AI]");
        }
        UI::draw_centered_text(&label, self.screen_width / 2.0, 20.0, 28.0, palette::GOAL);
    }

    fn render_messages(&self) {
        let line_height = 20.0;
        let base_y = self.screen_height - line_height * self.messages.len() as f32;
        for (i, message) in self.messages.iter().enumerate() {
            draw_text(message, 10.0, base_y + i as f32 * line_height, 18.0, palette::GOAL);
        }
    }

    /// Adds a message to the message history.
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);

        // Keep only the most recent messages
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }

    /// Drops all messages.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}
