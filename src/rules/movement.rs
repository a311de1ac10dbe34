//! Movement legality per piece kind
//!
//! Every rule is a one-step adjacency test. Range, blocking, and
//! captures from real chess do not apply: a rook steps one cell here.

use crate::board::{PieceKind, Pos};

/// Orthogonal neighbors, shared by King and Rook
const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal neighbors (Bishop)
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight surrounding cells (Queen)
const AROUND: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The eight knight hops
const KNIGHT_HOPS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// Relative (row, col) offsets a piece kind may slide along.
#[inline]
pub fn offsets(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Queen => &AROUND,
        PieceKind::King | PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Knight => &KNIGHT_HOPS,
    }
}

/// Check whether `kind` standing on `from` may slide onto `to`.
///
/// Pure adjacency test with no bounds clipping: `to` is always the
/// board's free cell, which lies inside the grid by invariant.
#[inline]
pub fn is_legal_move(kind: PieceKind, from: Pos, to: Pos) -> bool {
    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    offsets(kind).contains(&(dr, dc))
}
