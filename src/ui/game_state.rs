//! Game state management for the puzzle GUI

use crate::board::{notation, Board, Pos};
use std::time::{Duration, Instant};

/// Wall-clock timer for the current round
pub struct RoundTimer {
    start: Instant,
    frozen: Option<Duration>,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            frozen: None,
        }
    }
}

impl RoundTimer {
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.frozen = None;
    }

    /// Stop the clock, keeping the final time for display.
    pub fn freeze(&mut self) {
        self.frozen = Some(self.start.elapsed());
    }

    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.start.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    /// Two-character cell token being typed in the move entry box
    pub move_input: String,
    pub message: Option<String>,
    pub round_won: bool,
    pub moves: u32,
    pub rounds_won: u32,
    pub round_timer: RoundTimer,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(&mut rand::rng()),
            move_input: String::new(),
            message: None,
            round_won: false,
            moves: 0,
            rounds_won: 0,
            round_timer: RoundTimer::default(),
        }
    }

    /// Deal the next round; session tallies survive.
    pub fn new_round(&mut self) {
        self.board.reset(&mut rand::rng());
        self.move_input.clear();
        self.message = None;
        self.round_won = false;
        self.moves = 0;
        self.round_timer.restart();
    }

    /// Attempt to slide the piece on `pos` into the free cell.
    pub fn try_move(&mut self, pos: Pos) -> Result<(), String> {
        if self.round_won {
            return Err("round is over".to_string());
        }

        self.board.try_move(pos).map_err(|e| e.to_string())?;
        self.moves += 1;
        self.message = None;

        if self.board.is_victory() {
            self.round_won = true;
            self.rounds_won += 1;
            self.round_timer.freeze();
        }
        Ok(())
    }

    /// Route a move attempt, surfacing any rejection in the message card.
    pub fn play(&mut self, pos: Pos) {
        if let Err(msg) = self.try_move(pos) {
            self.message = Some(msg);
        }
    }

    /// Play whatever is typed in the move entry box.
    pub fn submit_move_input(&mut self) {
        let token = std::mem::take(&mut self.move_input);
        let token = token.trim();
        if token.is_empty() {
            return;
        }

        match notation::parse_move(token) {
            Some(pos) => self.play(pos),
            None => self.message = Some(format!("invalid move '{}'", token)),
        }
    }
}
