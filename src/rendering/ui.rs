//! # User Interface Elements
//!
//! Main menu and ending screens.

use crate::rendering::palette;
use macroquad::prelude::*;
use std::time::Duration;

/// Layout for the menu and ending screens.
pub struct UI {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
}

impl UI {
    /// Creates the UI for a screen of the given size.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// Bounds of the main menu start button.
    pub fn start_button(&self) -> Rect {
        Rect::new(
            self.screen_width / 4.0,
            self.screen_height / 2.0,
            self.screen_width / 2.0,
            50.0,
        )
    }

    /// Renders the main menu and returns the start button bounds.
    pub fn render_main_menu(&self) -> Rect {
        clear_background(palette::BACKGROUND);
        Self::draw_centered_text(
            "AI Maze Explorer",
            self.screen_width / 2.0,
            self.screen_height / 4.0,
            36.0,
            palette::CORRIDOR,
        );

        let button = self.start_button();
        draw_rectangle(button.x, button.y, button.w, button.h, palette::PLAYER);
        Self::draw_centered_text(
            "Start",
            button.x + button.w / 2.0,
            button.y + button.h / 2.0,
            36.0,
            palette::BACKGROUND,
        );
        Self::draw_centered_text(
            "Arrows: move   A: AI mode   R: new maze   Esc: quit",
            self.screen_width / 2.0,
            self.screen_height * 3.0 / 4.0,
            18.0,
            palette::CORRIDOR,
        );
        button
    }

    /// Renders the congratulations screen.
    pub fn render_ending_screen(&self, total: Duration) {
        clear_background(palette::BACKGROUND);
        Self::draw_centered_text(
            "Congratulations!",
            self.screen_width / 2.0,
            self.screen_height / 3.0,
            36.0,
            palette::PLAYER,
        );
        Self::draw_centered_text(
            &format!("Your time: {:.2} seconds", total.as_secs_f64()),
            self.screen_width / 2.0,
            self.screen_height / 2.0,
            36.0,
            palette::CORRIDOR,
        );
        Self::draw_centered_text(
            "Press any key to return to main menu",
            self.screen_width / 2.0,
            self.screen_height * 2.0 / 3.0,
            28.0,
            palette::CORRIDOR,
        );
    }

    /// Draws text centered on `(x, y)`.
    pub fn draw_centered_text(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let dimensions = measure_text(text, None, font_size as u16, 1.0);
        draw_text(
            text,
            x - dimensions.width / 2.0,
            y + dimensions.offset_y / 2.0,
            font_size,
            color,
        );
    }
}
