use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{scripted_input, CommandError, GameState, Menu, MenuOutcome, MoveError};

fn menu(script: &str) -> Menu<Vec<u8>> {
    Menu::new(scripted_input(script), Vec::new(), SmallRng::seed_from_u64(11))
}

fn output(menu: Menu<Vec<u8>>) -> String {
    String::from_utf8(menu.into_output()).expect("non utf8 output")
}

#[test]
fn test_bot_game_is_printed() {
    let mut m = menu("");
    let outcome = m.handle("start easy medium").unwrap();
    let MenuOutcome::GameEnded(state) = outcome else {
        panic!("expected a finished game, got {outcome:?}");
    };
    assert!(state.is_terminal());
    assert!(m.is_running());

    let out = output(m);
    assert!(out.starts_with("---------\n|       |\n|       |\n|       |\n---------\n"));
    assert!(out.contains("Making move level \"easy\""));
    assert!(out.contains("Making move level \"medium\""));
    assert!(out.trim_end().ends_with(state.name()));
}

#[test]
fn test_bad_command_keeps_running() {
    let mut m = menu("");
    assert_eq!(
        m.handle("start medium").unwrap(),
        MenuOutcome::Rejected(CommandError::BadParameters)
    );
    assert!(m.is_running());
    assert_eq!(output(m), "Bad parameters!\n");
}

#[test]
fn test_exit_stops_menu() {
    let mut m = menu("");
    assert_eq!(m.handle("exit").unwrap(), MenuOutcome::Exiting);
    assert!(!m.is_running());
}

#[test]
fn test_run_until_exit() {
    let mut m = menu("foo\nstart hard hard\nexit\nstart easy easy\n");
    m.run().unwrap();
    assert!(!m.is_running());

    let out = output(m);
    assert_eq!(out.matches("Input command: ").count(), 3);
    assert!(out.contains("Bad parameters!"));
    assert!(out.contains(GameState::Draw.name()));
    assert!(!out.contains("Making move level \"easy\""));
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut m = menu("start easy easy\n");
    m.run().unwrap();
    assert!(!m.is_running());
}

#[test]
fn test_human_game_aborts_when_input_closes() {
    let mut m = menu("");
    assert_eq!(
        m.handle("start user easy").unwrap(),
        MenuOutcome::Aborted(MoveError::InputClosed)
    );
    assert!(!m.is_running());
    assert!(output(m).contains("Enter the coordinates: "));
}

#[test]
fn test_human_moves_come_from_menu_input() {
    let mut m = menu("start user hard\n2 2\n");
    m.run().unwrap();
    assert!(!m.is_running());

    let out = output(m);
    assert!(out.contains("---------\n|       |\n|   X   |\n|       |\n---------"));
    assert!(out.contains("Making move level \"hard\""));
    assert!(out.contains("Input closed before a move was entered"));
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_game_output_failure_is_an_error() {
    let mut m = Menu::new(scripted_input(""), ClosedPipe, SmallRng::seed_from_u64(3));
    let err = m.handle("start easy easy").unwrap_err();
    let io_err = err.downcast_ref::<io::Error>().expect("io error");
    assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
}
