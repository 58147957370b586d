#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{create_player, init_logging, stdin_input, ConsoleReporter, GameLoop, Menu, PlayerKind, Symbol};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible bot moves (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Read `start <x> <o>` / `exit` commands from stdin (the default).
    Menu,
    /// Play a single game and exit.
    Play {
        #[arg(value_enum)]
        x: PlayerKind,
        #[arg(value_enum)]
        o: PlayerKind,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
    }
    let rng = make_rng(cli.seed);
    let input = stdin_input();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut menu = Menu::new(input, std::io::stdout(), rng);
            menu.run()?;
        }
        Commands::Play { x, o } => {
            let mut rng = rng;
            let mut game = GameLoop::new(
                create_player(x, Symbol::X, &input),
                create_player(o, Symbol::O, &input),
            );
            let mut reporter = ConsoleReporter::new(std::io::stdout());
            reporter.show_board(game.board());
            let state = game.run(&mut rng, &mut reporter)?;
            reporter.show_result(state);
            if let Some(e) = reporter.take_error() {
                return Err(e.into());
            }
        }
    }
    Ok(())
}
