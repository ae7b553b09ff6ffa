//! Core game logic module - pure, deterministic, and testable
//!
//! All game rules live here with zero dependencies on UI or I/O:
//!
//! - [`tetromino`]: the seven piece kinds, their rotation states and colors
//! - [`board`]: the grid, with line clearing and compaction
//! - [`collision`]: the one legality check used by every transition
//! - [`piece`]: the falling piece value type
//! - [`game`]: the transition state machine (move, rotate, lock, spawn)
//! - [`rng`]: seeded LCG and uniform piece selection

pub mod board;
pub mod collision;
pub mod game;
pub mod piece;
pub mod rng;
pub mod tetromino;

pub use board::Board;
pub use collision::collides;
pub use game::{Game, StepOutcome};
pub use piece::ActivePiece;
pub use rng::SimpleRng;
pub use tetromino::{Kind, RotationGrid};
