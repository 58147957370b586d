use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    score_moves, Board, GameLoop, GameState, HeuristicBot, MoveError, OptimalBot, Player,
    RandomBot, SilentReporter, Symbol,
};

fn board(cells: &str) -> Board {
    Board::from_cells(cells).unwrap()
}

fn decide(player: &mut dyn Player, cells: &str, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    player.decide(&mut rng, &board(cells)).unwrap()
}

#[test]
fn test_medium_bot_takes_the_win() {
    let mut bot = HeuristicBot::new(Symbol::X);
    assert_eq!(decide(&mut bot, "X X  O O ", 1).to_cells(), "XXX  O O ");
    assert_eq!(decide(&mut bot, "X X  OO  ", 1).to_cells(), "XXX  OO  ");
}

#[test]
fn test_medium_bot_blocks_the_opponent() {
    let mut bot = HeuristicBot::new(Symbol::X);
    assert_eq!(decide(&mut bot, "  XO  OX ", 1).to_cells(), "X XO  OX ");

    let mut bot = HeuristicBot::new(Symbol::O);
    assert_eq!(decide(&mut bot, "XX  O    ", 1).to_cells(), "XXO O    ");
}

#[test]
fn test_medium_bot_prefers_winning_over_blocking() {
    let mut bot = HeuristicBot::new(Symbol::O);
    assert_eq!(decide(&mut bot, "XX X O  O", 1).to_cells(), "XXOX O  O");
}

#[test]
fn test_medium_bot_breaks_ties_by_index_order() {
    // wins at index 2 (top row) and index 8 (diagonal); the lower index is taken
    let mut bot = HeuristicBot::new(Symbol::X);
    for seed in 0..10 {
        assert_eq!(decide(&mut bot, "XX  XO O ", seed).to_cells(), "XXX XO O ");
    }
}

#[test]
fn test_medium_bot_falls_back_to_random() {
    let input = board("  X  OOX ");
    let mut bot = HeuristicBot::new(Symbol::X);
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let next = bot.decide(&mut rng, &input).unwrap();
        assert_ne!(next, input, "no one can win in one move, random!");
        let changed: Vec<usize> = (0..9)
            .filter(|&i| input.cells()[i] != next.cells()[i])
            .collect();
        assert_eq!(changed.len(), 1);
        assert!(input.cells()[changed[0]].is_empty());
    }
}

#[test]
fn test_random_bot_plays_an_empty_cell() {
    let input = board("X O  X  O");
    let mut bot = RandomBot::new(Symbol::X);
    for seed in 0..20 {
        let next = decide(&mut bot, "X O  X  O", seed);
        assert_eq!(next.count(Symbol::X), input.count(Symbol::X) + 1);
        assert_eq!(next.count(Symbol::O), input.count(Symbol::O));
    }
}

#[test]
fn test_bots_fail_on_full_board() {
    let full = board("XOXXOOOXX");
    let mut rng = SmallRng::seed_from_u64(3);
    let mut bots: Vec<Box<dyn Player>> = vec![
        Box::new(RandomBot::new(Symbol::O)),
        Box::new(HeuristicBot::new(Symbol::O)),
        Box::new(OptimalBot::new(Symbol::O)),
    ];
    for bot in bots.iter_mut() {
        let err = bot.decide(&mut rng, &full).unwrap_err();
        assert_eq!(err, MoveError::NoMovesAvailable);
        assert!(!err.is_recoverable());
    }
}

#[test]
fn test_move_messages() {
    assert_eq!(RandomBot::new(Symbol::X).move_message(), "Making move level \"easy\"");
    assert_eq!(HeuristicBot::new(Symbol::X).move_message(), "Making move level \"medium\"");
    assert_eq!(OptimalBot::new(Symbol::O).move_message(), "Making move level \"hard\"");
}

#[test]
fn test_hard_bot_takes_immediate_win() {
    let mut bot = OptimalBot::new(Symbol::X);
    for seed in 0..5 {
        assert_eq!(decide(&mut bot, "XX OO    ", seed).to_cells(), "XXXOO    ");
    }
}

#[test]
fn test_hard_bot_blocks_only_saving_move() {
    let mut bot = OptimalBot::new(Symbol::X);
    for seed in 0..5 {
        assert_eq!(decide(&mut bot, "X  OO   X", seed).to_cells(), "X  OOX  X");
    }
}

#[test]
fn test_empty_board_is_a_draw_with_best_play() {
    let empty = Board::empty();
    let scores = score_moves(&empty, Symbol::X);
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|&(_, score)| score == 0));
}

#[test]
fn test_hard_bot_finds_forced_win() {
    // corner X answered by an adjacent edge O loses to the center
    let start = board("XO       ");
    let scores = score_moves(&start, Symbol::X);
    assert!(scores.iter().any(|&(_, score)| score > 0));
}

#[test]
fn test_scores_outlive_the_scored_board() {
    // X taking the center wins against an edge O
    let scores = score_moves(&board("XO       "), Symbol::X);
    assert_eq!(scores.len(), 7);
    let indices: Vec<usize> = scores.iter().filter_map(|(c, _)| c.index()).collect();
    assert_eq!(indices, vec![2, 3, 4, 5, 6, 7, 8]);
    let (center, score) = &scores[2];
    assert_eq!(center.index(), Some(4));
    assert!(*score > 0);
}

fn play(x: Box<dyn Player>, o: Box<dyn Player>, seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    GameLoop::new(x, o).run(&mut rng, &mut SilentReporter).unwrap()
}

#[test]
fn test_hard_bot_never_loses() {
    for seed in 0..30 {
        let state = play(
            Box::new(OptimalBot::new(Symbol::X)),
            Box::new(RandomBot::new(Symbol::O)),
            seed,
        );
        assert_ne!(state, GameState::OWins, "seed {seed}");

        let state = play(
            Box::new(RandomBot::new(Symbol::X)),
            Box::new(OptimalBot::new(Symbol::O)),
            seed,
        );
        assert_ne!(state, GameState::XWins, "seed {seed}");

        let state = play(
            Box::new(HeuristicBot::new(Symbol::X)),
            Box::new(OptimalBot::new(Symbol::O)),
            seed,
        );
        assert_ne!(state, GameState::XWins, "seed {seed}");
    }
}

#[test]
fn test_hard_vs_hard_draws() {
    for seed in 0..5 {
        let state = play(
            Box::new(OptimalBot::new(Symbol::X)),
            Box::new(OptimalBot::new(Symbol::O)),
            seed,
        );
        assert_eq!(state, GameState::Draw);
    }
}
