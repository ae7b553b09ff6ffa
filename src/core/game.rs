//! Game module - the active piece controller and session state
//!
//! Owns the board, the falling piece, score/speed progression, and the
//! game-over latch. Every transition is checked against the collision
//! resolver and either fully applies or is silently rejected; there is no
//! partial application anywhere.

use crate::core::board::Board;
use crate::core::collision::collides;
use crate::core::piece::ActivePiece;
use crate::core::rng::SimpleRng;
use crate::types::{GameAction, BASE_SPEED, GRAVITY_BASE_MS, SCORE_PER_ROW, SPEED_SCORE_DIVISOR};

/// Result of a downward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move and was locked into the board.
    Locked,
    /// The game is over; nothing happened.
    Ignored,
}

/// Complete session state. The board is built once and mutated in place; the
/// active piece is replaced on every lock and never destroyed on its own.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: ActivePiece,
    rng: SimpleRng,
    score: u32,
    speed: f64,
    game_over: bool,
}

impl Game {
    pub fn new(columns: u16, rows: u16, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::spawn(rng.next_kind());
        Self {
            board: Board::new(columns, rows),
            active,
            rng,
            score: 0,
            speed: BASE_SPEED,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Gravity rate in cells per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Milliseconds between gravity steps at the current speed.
    pub fn gravity_interval_ms(&self) -> f64 {
        GRAVITY_BASE_MS / self.speed
    }

    /// Shift the piece one column left. Silently rejected on collision.
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Shift the piece one column right. Silently rejected on collision.
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, d_col: i32) -> bool {
        if self.game_over {
            return false;
        }
        if collides(&self.board, &self.active, d_col, 0, self.active.grid()) {
            return false;
        }
        self.active.col += d_col;
        true
    }

    /// Drop the piece one row; locks it instead when the row below is not
    /// free. Gravity and manual soft-drop both come through here.
    pub fn move_down(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Ignored;
        }
        if collides(&self.board, &self.active, 0, 1, self.active.grid()) {
            self.lock();
            StepOutcome::Locked
        } else {
            self.active.row += 1;
            StepOutcome::Moved
        }
    }

    /// Advance to the next rotation state. If the rotated piece collides in
    /// place, one wall kick is attempted: a single column toward the board
    /// center (left when the piece sits past the horizontal midpoint,
    /// right otherwise). If the kicked position also collides the rotation
    /// is rejected entirely. Deliberately not an SRS kick table.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let next = self.active.next_grid();

        let d_col = if !collides(&self.board, &self.active, 0, 0, next) {
            0
        } else {
            let kick = if self.active.col > self.board.columns() / 2 {
                -1
            } else {
                1
            };
            if collides(&self.board, &self.active, kick, 0, next) {
                return false;
            }
            kick
        };

        self.active.col += d_col;
        self.active.rotation = self.active.next_rotation();
        true
    }

    /// Single entry point for discrete input signals.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down() != StepOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Write the piece into the board, clear full rows, update score and
    /// speed, and spawn a replacement. A piece that still has an occupied
    /// sub-cell above the board tops the game out instead: the latch flips
    /// and all further mutation stops.
    fn lock(&mut self) {
        if self.active.cells().any(|(_, row)| row < 0) {
            self.game_over = true;
            return;
        }

        let color = self.active.kind.color();
        for (col, row) in self.active.cells() {
            self.board.lock_cell(col, row, color);
        }

        let cleared = self.board.clear_full_rows();
        self.score += SCORE_PER_ROW * cleared.len() as u32;
        self.speed = BASE_SPEED + f64::from(self.score) / SPEED_SCORE_DIVISOR;

        self.active = ActivePiece::spawn(self.rng.next_kind());
    }
}
