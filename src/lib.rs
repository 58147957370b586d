#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod command;
pub mod core;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod menu;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use command::*;
pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use menu::*;
pub use player::{HeuristicBot, OptimalBot, Player, PlayerKind, RandomBot};
#[cfg(feature = "std")]
pub use player::{
    cli::{scripted_input, stdin_input},
    create_player, HumanPlayer, LineSource, SharedInput,
};
#[cfg(feature = "std")]
pub use ui::*;
