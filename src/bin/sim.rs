use tictactoe::{init_logging, GameLoop, PlayerKind, SilentReporter, Symbol};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn parse_level(arg: &str) -> anyhow::Result<PlayerKind> {
    match PlayerKind::from_name(arg) {
        Some(PlayerKind::User) | None => {
            Err(anyhow::anyhow!("unsupported level {:?}: use easy, medium or hard", arg))
        }
        Some(kind) => Ok(kind),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <seed> <x-level> <o-level>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let x = parse_level(&args[2])?;
    let o = parse_level(&args[3])?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let x_bot = x.bot(Symbol::X).ok_or_else(|| anyhow::anyhow!("no bot for {}", x))?;
    let o_bot = o.bot(Symbol::O).ok_or_else(|| anyhow::anyhow!("no bot for {}", o))?;

    let mut game = GameLoop::new(x_bot, o_bot);
    let state = game.run(&mut rng, &mut SilentReporter)?;

    let result = json!({
        "x": x,
        "o": o,
        "state": state,
        "moves": game.move_count(),
        "board": game.board().to_cells(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
