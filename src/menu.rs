#![cfg(feature = "std")]

//! The start menu: read a command, play a game, repeat until `exit`.

use std::io::Write;

use crate::{
    command::{Command, CommandError},
    core::{GameLoop, GameState, MoveError, Symbol},
    player::{create_player, PlayerKind, SharedInput},
    ui::ConsoleReporter,
};
use rand::rngs::SmallRng;

/// What a single menu line led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The command was refused; the menu keeps running.
    Rejected(CommandError),
    /// `exit` was entered.
    Exiting,
    /// A game was played to the end.
    GameEnded(GameState),
    /// A game stopped early because a player could not move.
    Aborted(MoveError),
}

pub struct Menu<W: Write> {
    input: SharedInput,
    out: W,
    rng: SmallRng,
    running: bool,
}

impl<W: Write> Menu<W> {
    pub fn new(input: SharedInput, out: W, rng: SmallRng) -> Self {
        Self {
            input,
            out,
            rng,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompt for and handle commands until `exit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.running {
            writeln!(self.out, "Input command: ")?;
            self.out.flush()?;
            let line = self.input.borrow_mut().next_line()?;
            let Some(line) = line else {
                log::info!("input closed, leaving menu");
                self.running = false;
                break;
            };
            self.handle(&line)?;
        }
        Ok(())
    }

    /// Validate and act on one command line.
    pub fn handle(&mut self, line: &str) -> anyhow::Result<MenuOutcome> {
        match Command::parse(line) {
            Err(e) => {
                log::debug!("rejected command {:?}", line);
                writeln!(self.out, "{}", e)?;
                Ok(MenuOutcome::Rejected(e))
            }
            Ok(Command::Exit) => {
                self.running = false;
                Ok(MenuOutcome::Exiting)
            }
            Ok(Command::Start { x, o }) => self.play(x, o),
        }
    }

    /// Play one game between the given levels, printing it as it goes.
    pub fn play(&mut self, x: PlayerKind, o: PlayerKind) -> anyhow::Result<MenuOutcome> {
        log::info!("starting {} (X) vs {} (O)", x, o);
        let mut game = GameLoop::new(
            create_player(x, Symbol::X, &self.input),
            create_player(o, Symbol::O, &self.input),
        );

        let mut reporter = ConsoleReporter::new(&mut self.out);
        reporter.show_board(game.board());
        let result = game.run(&mut self.rng, &mut reporter);
        if let Ok(state) = result {
            reporter.show_result(state);
        }
        if let Some(e) = reporter.take_error() {
            return Err(e.into());
        }
        match result {
            Ok(state) => Ok(MenuOutcome::GameEnded(state)),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                if e == MoveError::InputClosed {
                    self.running = false;
                }
                Ok(MenuOutcome::Aborted(e))
            }
        }
    }
}
