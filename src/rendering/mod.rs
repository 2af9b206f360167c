//! # Rendering Module
//!
//! 2D rendering of the maze, the menu and the ending screen using macroquad.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use macroquad::prelude::Color;

/// Colors shared by the display and UI screens.
pub mod palette {
    use super::Color;

    /// Screen background and blocked cells
    pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Open cells and regular text
    pub const CORRIDOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Cells on the AI path
    pub const PATH: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 100.0 / 255.0, 1.0);
    /// Player marker and the start button
    pub const PLAYER: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Goal marker
    pub const GOAL: Color = Color::new(1.0, 215.0 / 255.0, 0.0, 1.0);
}
