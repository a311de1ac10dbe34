//! Board state machine: shuffle, slide, victory

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Piece, PieceKind, Pos, BOARD_SIZE, CORNERS, PIECE_COUNT, TOTAL_CELLS};
use crate::rules::movement;

/// Kinds in slot order. Slot 0 is the target piece and slots never
/// reorder, so the queen stays at index 0 for the board's lifetime.
const PIECE_KINDS: [PieceKind; PIECE_COUNT] = [
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::King,
    PieceKind::Rook,
    PieceKind::Rook,
    PieceKind::Rook,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Knight,
    PieceKind::Knight,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Bishop,
    PieceKind::Bishop,
    PieceKind::Bishop,
];

/// Why a requested slide was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The named cell holds no piece
    NoPiece,
    /// The piece cannot reach the free cell with its movement rule
    IllegalSlide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece => write!(f, "no piece on that cell"),
            MoveError::IllegalSlide => write!(f, "that piece cannot reach the free cell"),
        }
    }
}

/// Game board: 15 pieces, one free cell, one goal corner
///
/// The pieces and the free cell together always cover every grid cell
/// exactly once; `try_move` is the only mutation between resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: [Piece; PIECE_COUNT],
    free_cell: Pos,
    goal: Pos,
}

impl Board {
    /// Create a board and deal the opening layout.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self {
            pieces: std::array::from_fn(|i| {
                Piece::new(PIECE_KINDS[i], Pos::from_index(i), i == 0)
            }),
            free_cell: Pos::from_index(PIECE_COUNT),
            goal: CORNERS[0],
        };
        board.reset(rng);
        board
    }

    /// Deal a fresh round: draw a goal corner, then reshuffle the piece
    /// layout until the round does not open already won.
    ///
    /// The goal is drawn once and held fixed across retries; only the
    /// piece positions are resampled.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.goal = CORNERS[rng.random_range(0..CORNERS.len())];
        loop {
            self.scatter(rng);
            if self.target().pos != self.goal {
                break;
            }
        }
    }

    /// Assign a random permutation of all cells: the first 15 to the
    /// pieces in slot order, the 16th to the free cell.
    fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut cells: [Pos; TOTAL_CELLS] = std::array::from_fn(Pos::from_index);
        cells.shuffle(rng);
        for (piece, &cell) in self.pieces.iter_mut().zip(cells.iter()) {
            piece.pos = cell;
        }
        self.free_cell = cells[PIECE_COUNT];
    }

    /// Slide the piece on `target` into the free cell.
    ///
    /// On success the piece and the free cell swap places; on rejection
    /// the board is left untouched.
    pub fn try_move(&mut self, target: Pos) -> Result<(), MoveError> {
        let idx = self
            .pieces
            .iter()
            .position(|piece| piece.pos == target)
            .ok_or(MoveError::NoPiece)?;
        if !movement::is_legal_move(self.pieces[idx].kind, target, self.free_cell) {
            return Err(MoveError::IllegalSlide);
        }

        self.pieces[idx].pos = self.free_cell;
        self.free_cell = target;
        Ok(())
    }

    /// True iff the target piece stands on the goal
    #[inline]
    pub fn is_victory(&self) -> bool {
        self.target().pos == self.goal
    }

    /// The piece whose arrival on the goal ends the round
    #[inline]
    pub fn target(&self) -> &Piece {
        &self.pieces[0]
    }

    /// All pieces, in fixed slot order
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece on `pos`, if any
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.pos == pos)
    }

    /// The one unoccupied cell
    #[inline]
    pub fn free_cell(&self) -> Pos {
        self.free_cell
    }

    /// The corner the target piece must reach
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Board width and height (the grid is square)
    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Test-only: build a board from an explicit cell assignment, the
    /// first 15 cells to the pieces in slot order, the 16th free.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [Pos; TOTAL_CELLS], goal: Pos) -> Self {
        let pieces: [Piece; PIECE_COUNT] =
            std::array::from_fn(|i| Piece::new(PIECE_KINDS[i], cells[i], i == 0));
        Self {
            pieces,
            free_cell: cells[PIECE_COUNT],
            goal,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&mut rand::rng())
    }
}
