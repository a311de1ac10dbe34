//! Board rendering for the puzzle GUI

use crate::board::{Board, Pos, BOARD_SIZE};
use crate::rules::movement;
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are reported for every cell so the caller can surface a
    /// proper rejection for illegal ones; the hover tint already hints
    /// at legality.
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, round_over: bool) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board fitted to the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Frame behind the squares
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_FRAME);

        self.draw_squares(&painter, board);
        self.draw_labels(&painter);
        self.draw_pieces(&painter, board);

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !round_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.piece_at(board_pos).is_some_and(|piece| {
                        movement::is_legal_move(piece.kind, piece.pos, board.free_cell())
                    });

                    let hover_color = if is_valid {
                        super::theme::hover_valid()
                    } else {
                        super::theme::hover_invalid()
                    };
                    painter.rect_filled(self.cell_rect(board_pos), CornerRadius::same(2), hover_color);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the checkered squares, with the goal cell in its own fill
    fn draw_squares(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let color = if pos == board.goal() {
                    GOAL_SQUARE
                } else if (row + col) % 2 == 0 {
                    LIGHT_SQUARE
                } else {
                    DARK_SQUARE
                };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::same(2), color);
            }
        }
    }

    /// Draw coordinate labels (a-d, 0-3) on both margins
    fn draw_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional(LABEL_FONT_SIZE);

        for col in 0..BOARD_SIZE {
            let letter = (b'a' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;

            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_COLOR);

            let pos = Pos2::new(x, self.board_rect.max.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_COLOR);
        }

        for row in 0..BOARD_SIZE {
            let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;

            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row),
                font.clone(),
                LABEL_COLOR,
            );

            let pos = Pos2::new(self.board_rect.max.x - BOARD_MARGIN * 0.5, y);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{}", row),
                font.clone(),
                LABEL_COLOR,
            );
        }
    }

    /// Draw every piece's letter at its cell
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        let font = egui::FontId::monospace(self.cell_size * PIECE_FONT_RATIO);

        for piece in board.pieces() {
            let color = if piece.is_target {
                TARGET_PIECE
            } else if piece.pos == board.goal() {
                PIECE_ON_GOAL
            } else {
                PIECE_COLOR
            };

            painter.text(
                self.cell_rect(piece.pos).center(),
                egui::Align2::CENTER_CENTER,
                piece.kind.symbol(),
                font.clone(),
                color,
            );
        }
    }

    /// Drawing area of one cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_INSET)
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
