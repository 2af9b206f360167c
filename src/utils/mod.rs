//! # Utilities Module
//!
//! Search algorithms over generated grids.

pub mod astar;

pub use astar::*;
