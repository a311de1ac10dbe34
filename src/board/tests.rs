use super::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Deterministic board: queen on `queen`, free cell on `free`, the
/// remaining pieces filling the other cells in index order.
fn layout(queen: Pos, free: Pos, goal: Pos) -> Board {
    let mut cells = vec![queen];
    cells.extend((0..TOTAL_CELLS).map(Pos::from_index).filter(|&p| p != queen && p != free));
    cells.push(free);
    let cells: [Pos; TOTAL_CELLS] = cells.try_into().unwrap();
    Board::from_cells(cells, goal)
}

/// Piece positions plus the free cell must be a permutation of the grid.
fn assert_covers_grid(board: &Board) {
    let mut cells: Vec<usize> = board.pieces().iter().map(|p| p.pos.to_index()).collect();
    cells.push(board.free_cell().to_index());
    cells.sort_unstable();
    let expected: Vec<usize> = (0..TOTAL_CELLS).collect();
    assert_eq!(cells, expected);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.to_index(), 2 * 4 + 1);

    let pos2 = Pos::from_index(9);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(3, 3));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(4, 0));
    assert!(!Pos::is_valid(0, 4));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 4);
    assert_eq!(TOTAL_CELLS, 16);
    assert_eq!(PIECE_COUNT, 15);

    let board = Board::new(&mut seeded(0));
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.pieces().len(), PIECE_COUNT);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 3).to_index(), 3);
    assert_eq!(Pos::new(3, 0).to_index(), 12);
    assert_eq!(Pos::new(3, 3).to_index(), 15);
}

#[test]
fn test_corners_are_distinct_grid_cells() {
    for corner in CORNERS {
        assert!(Pos::is_valid(corner.row as i32, corner.col as i32));
    }
    let mut indices: Vec<usize> = CORNERS.iter().map(|c| c.to_index()).collect();
    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), 4);
}

#[test]
fn test_reset_covers_every_cell() {
    for seed in 0..32 {
        let board = Board::new(&mut seeded(seed));
        assert_covers_grid(&board);
    }
}

#[test]
fn test_reset_never_opens_won() {
    for seed in 0..64 {
        let board = Board::new(&mut seeded(seed));
        assert!(!board.is_victory(), "seed {} opened already won", seed);
    }
}

#[test]
fn test_reset_goal_is_a_corner() {
    for seed in 0..32 {
        let board = Board::new(&mut seeded(seed));
        assert!(CORNERS.contains(&board.goal()));
    }
}

#[test]
fn test_exactly_one_target_piece() {
    let board = Board::new(&mut seeded(7));
    let targets: Vec<_> = board.pieces().iter().filter(|p| p.is_target).collect();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].kind, PieceKind::Queen);
    assert!(board.target().is_target);
}

#[test]
fn test_piece_kind_census() {
    let board = Board::new(&mut seeded(11));
    let count = |kind| board.pieces().iter().filter(|p| p.kind == kind).count();
    assert_eq!(count(PieceKind::Queen), 1);
    assert_eq!(count(PieceKind::King), 2);
    assert_eq!(count(PieceKind::Rook), 4);
    assert_eq!(count(PieceKind::Knight), 4);
    assert_eq!(count(PieceKind::Bishop), 4);
}

#[test]
fn test_piece_at() {
    let board = Board::new(&mut seeded(3));
    assert!(board.piece_at(board.free_cell()).is_none());
    for piece in board.pieces() {
        let found = board.piece_at(piece.pos).unwrap();
        assert_eq!(found.kind, piece.kind);
        assert_eq!(found.pos, piece.pos);
    }
}

#[test]
fn test_move_swaps_piece_and_free_cell() {
    let mut board = layout(Pos::new(1, 1), Pos::new(1, 0), Pos::new(0, 0));
    let old_free = board.free_cell();
    let others: Vec<Piece> = board.pieces()[1..].to_vec();

    assert_eq!(board.try_move(Pos::new(1, 1)), Ok(()));

    // The moved piece must land on the old free cell, not keep its own
    // position while only the free cell updates.
    assert_eq!(board.target().pos, old_free);
    assert_eq!(board.free_cell(), Pos::new(1, 1));
    assert_eq!(&board.pieces()[1..], others.as_slice());
    assert_covers_grid(&board);
}

#[test]
fn test_single_move_is_reversible() {
    let mut board = layout(Pos::new(1, 1), Pos::new(1, 0), Pos::new(0, 0));

    assert_eq!(board.try_move(Pos::new(1, 1)), Ok(()));
    assert_eq!(board.target().pos, Pos::new(1, 0));
    assert!(!board.is_victory());

    assert_eq!(board.try_move(Pos::new(1, 0)), Ok(()));
    assert_eq!(board.target().pos, Pos::new(1, 1));
    assert_eq!(board.free_cell(), Pos::new(1, 0));
}

#[test]
fn test_illegal_slide_leaves_board_unchanged() {
    let mut board = layout(Pos::new(1, 1), Pos::new(1, 0), Pos::new(0, 0));
    // The king on b0 sits diagonal to the free cell at a1.
    let king = board.piece_at(Pos::new(0, 1)).unwrap();
    assert_eq!(king.kind, PieceKind::King);

    let before = board.clone();
    assert_eq!(board.try_move(Pos::new(0, 1)), Err(MoveError::IllegalSlide));
    assert_eq!(board, before);
}

#[test]
fn test_move_on_free_cell_is_rejected() {
    let mut board = layout(Pos::new(1, 1), Pos::new(1, 0), Pos::new(0, 0));
    let before = board.clone();
    assert_eq!(board.try_move(Pos::new(1, 0)), Err(MoveError::NoPiece));
    assert_eq!(board, before);
}

#[test]
fn test_victory_fires_exactly_on_goal() {
    let mut board = layout(Pos::new(0, 1), Pos::new(0, 0), Pos::new(0, 0));
    assert!(!board.is_victory());

    assert_eq!(board.try_move(Pos::new(0, 1)), Ok(()));
    assert_eq!(board.target().pos, board.goal());
    assert!(board.is_victory());
}

#[test]
fn test_invariants_hold_under_random_play() {
    for seed in 0..8 {
        let mut rng = seeded(100 + seed);
        let mut board = Board::new(&mut rng);
        let goal = board.goal();
        for _ in 0..200 {
            let probe = Pos::from_index(rng.random_range(0..TOTAL_CELLS));
            let _ = board.try_move(probe);
            assert_covers_grid(&board);
            assert_eq!(board.goal(), goal);
        }
        assert_eq!(board.pieces().iter().filter(|p| p.is_target).count(), 1);
    }
}

#[test]
fn test_default_board_is_playable() {
    let board = Board::default();
    assert_covers_grid(&board);
    assert!(!board.is_victory());
}

#[test]
fn test_move_error_messages() {
    assert_eq!(MoveError::NoPiece.to_string(), "no piece on that cell");
    assert_eq!(
        MoveError::IllegalSlide.to_string(),
        "that piece cannot reach the free cell"
    );
}

#[test]
fn test_piece_symbols() {
    assert_eq!(PieceKind::Queen.symbol(), 'Q');
    assert_eq!(PieceKind::King.symbol(), 'K');
    assert_eq!(PieceKind::Rook.symbol(), 'R');
    assert_eq!(PieceKind::Knight.symbol(), 'N');
    assert_eq!(PieceKind::Bishop.symbol(), 'B');
}
