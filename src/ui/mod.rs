//! GUI module for the puzzle
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::PuzzleApp;
pub use game_state::{GameState, RoundTimer};
