//! Core Connect Four game logic: board representation, seats and players, and
//! the game session that sequences moves.

mod board;
mod player;
mod session;

pub use board::{Board, Position, WinningLine, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{Player, Seat};
pub use session::{GameSession, Ignored, MoveResult, Outcome, Phase, Placement};
