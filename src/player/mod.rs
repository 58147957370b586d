//! Player trait and implementations
//!
//! - RandomBot, HeuristicBot, OptimalBot: the computer levels
//! - HumanPlayer: coordinates typed on the command line
//! - PlayerKind: level names as they appear in menu commands

use alloc::boxed::Box;
use alloc::string::String;

use crate::core::{Board, MoveError, Symbol};
use rand::rngs::SmallRng;

/// Interface implemented by every kind of player.
pub trait Player {
    /// Symbol this player places.
    fn symbol(&self) -> Symbol;

    /// Banner shown before the player's turn.
    fn move_message(&self) -> String;

    /// Produce the board after this player's move.
    fn decide(&mut self, rng: &mut SmallRng, board: &Board) -> Result<Board, MoveError>;
}

/// Who controls a side: a person or one of the bot levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum PlayerKind {
    User,
    Easy,
    Medium,
    Hard,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::User,
        PlayerKind::Easy,
        PlayerKind::Medium,
        PlayerKind::Hard,
    ];

    /// Name used in menu commands.
    pub fn name(self) -> &'static str {
        match self {
            PlayerKind::User => "user",
            PlayerKind::Easy => "easy",
            PlayerKind::Medium => "medium",
            PlayerKind::Hard => "hard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Build a bot for this level. `None` for [`PlayerKind::User`].
    pub fn bot(self, symbol: Symbol) -> Option<Box<dyn Player>> {
        match self {
            PlayerKind::User => None,
            PlayerKind::Easy => Some(Box::new(RandomBot::new(symbol))),
            PlayerKind::Medium => Some(Box::new(HeuristicBot::new(symbol))),
            PlayerKind::Hard => Some(Box::new(OptimalBot::new(symbol))),
        }
    }
}

impl core::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Build any player; humans read from `input`.
#[cfg(feature = "std")]
pub fn create_player(kind: PlayerKind, symbol: Symbol, input: &SharedInput) -> Box<dyn Player> {
    match kind.bot(symbol) {
        Some(bot) => bot,
        None => Box::new(HumanPlayer::new(symbol, input.clone())),
    }
}

// Re-export implementations
pub mod ai;
pub use ai::{HeuristicBot, OptimalBot, RandomBot};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{HumanPlayer, LineSource, SharedInput};
