//! Theme constants for the puzzle GUI

use egui::Color32;

// Board colors - warm wood tones
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(240, 217, 181);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(181, 136, 99);
pub const GOAL_SQUARE: Color32 = Color32::from_rgb(96, 130, 200);
pub const BOARD_FRAME: Color32 = Color32::from_rgb(60, 40, 20);
pub const LABEL_COLOR: Color32 = Color32::from_rgb(200, 195, 185);

// Piece colors
pub const PIECE_COLOR: Color32 = Color32::from_rgb(35, 30, 25);
pub const TARGET_PIECE: Color32 = Color32::from_rgb(205, 45, 45);
pub const PIECE_ON_GOAL: Color32 = Color32::from_rgb(245, 245, 250);

// Hover preview
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(60, 200, 90, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_PANEL_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const WIN_CARD_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_CARD_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const LABEL_FONT_SIZE: f32 = 14.0;
pub const PIECE_FONT_RATIO: f32 = 0.55;
pub const CELL_INSET: f32 = 1.5;
