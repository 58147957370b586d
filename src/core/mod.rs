//! Tic-tac-toe engine (no_std compatible)
//!
//! Board representation, state classification, bot move selection and the
//! turn loop. Everything here only needs `alloc`.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;

// Re-export commonly used types
pub use ai::{heuristic_move, optimal_move, random_move, score_moves, winning_move};
pub use board::Board;
pub use common::{BoardError, Cell, GameState, MoveError, Symbol, Winner};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{GameLoop, SilentReporter, TurnReporter};
