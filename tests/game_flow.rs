use reversi::config::GameConfig;
use reversi::policy::{FirstLegalSelector, GreedySelector, MoveSelector};
use reversi::types::{GameStatus, Winner};
use reversi::{Board, Cell, GameError, GameInstance, Player, Position, SubmitOutcome, TurnOutcome};

fn at(col: u8, row: u8) -> Position {
    Position::new(col, row).unwrap()
}

#[test]
fn initial_board_is_the_centered_cross() {
    let board = Board::new();
    let cells = board.to_array();

    assert_eq!(cells.iter().filter(|&&c| c == Cell::Black).count(), 2);
    assert_eq!(cells.iter().filter(|&&c| c == Cell::White).count(), 2);
    assert_eq!(cells.iter().filter(|&&c| c == Cell::Empty).count(), 60);
    // same colours sit on a diagonal
    assert_eq!(board.cell(at(3, 3)), board.cell(at(4, 4)));
    assert_eq!(board.cell(at(4, 3)), board.cell(at(3, 4)));
    assert_ne!(board.cell(at(3, 3)), board.cell(at(4, 3)));
}

#[test]
fn black_opening_at_c4_flips_d4() {
    let mut board = Board::new();
    let mv = board
        .legal_moves(Player::Black)
        .into_iter()
        .find(|mv| mv.position == at(2, 3))
        .expect("c4 is a legal opening");

    assert_eq!(mv.captured, vec![at(3, 3)]);
    board.apply_move(mv.position, Player::Black, &mv.captured);

    assert_eq!(board.count(), (4, 1));
    assert_eq!(board.empty_count(), 59);
}

#[test]
fn one_stuck_player_only_passes() {
    let board = Board::from_rows(&[
        ".XOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
        "OOOOOOOO",
    ])
    .unwrap();

    assert!(board.legal_moves(Player::Black).is_empty());
    assert!(!board.legal_moves(Player::White).is_empty());
    assert!(!board.is_terminal());

    let game = GameInstance::from_board(board, Player::Black, Player::Black, Box::new(GreedySelector));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::White);
    assert!(game.to_game_state().is_pass);
}

#[test]
fn both_stuck_is_terminal() {
    let board = Board::from_rows(&[
        "XXXX....",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "....OOOO",
    ])
    .unwrap();

    assert!(board.is_terminal());

    let game = GameInstance::from_board(board, Player::White, Player::Black, Box::new(GreedySelector));
    assert!(game.is_game_over());
    assert_eq!(game.to_game_result().winner, Winner::Draw);
    assert_eq!(game.to_game_result().message(), "Draw!");
}

#[test]
fn greedy_tie_goes_to_first_in_scan_order() {
    let board = Board::from_rows(&[
        "........",
        "..XOO...",
        "........",
        ".X......",
        ".O......",
        ".O......",
        "........",
        "........",
    ])
    .unwrap();

    let counts: Vec<(Position, usize)> = board
        .legal_moves(Player::Black)
        .into_iter()
        .map(|mv| (mv.position, mv.capture_count()))
        .collect();
    assert_eq!(counts, vec![(at(5, 1), 2), (at(1, 6), 2)]);

    for _ in 0..5 {
        let mv = GreedySelector.select_move(&board, Player::Black).unwrap();
        assert_eq!(mv.position, at(5, 1));
    }
}

#[test]
fn greedy_without_moves_fails_with_condition() {
    let board = Board::from_rows(&["XXXXXXXX"; 8]).unwrap();

    assert_eq!(
        GreedySelector.select_move(&board, Player::White),
        Err(GameError::NoLegalMoves { player: Player::White })
    );
}

#[test]
fn human_and_ai_play_to_completion() {
    let config = GameConfig {
        ai_delay_ms: 0,
        ..GameConfig::default()
    };
    let mut game = GameInstance::with_default_selector(&config);
    let mut plies = 0;

    while !game.is_game_over() {
        if game.is_ai_turn() {
            game.do_ai_move().unwrap();
        } else {
            let first = game.legal_moves()[0].position;
            let outcome = game.submit_move(first.col, first.row);
            assert!(matches!(outcome, SubmitOutcome::Applied(_)));
        }
        plies += 1;
        assert!(plies <= 60, "every ply fills a square");
    }

    let result = game.to_game_result();
    assert!(game.board().is_terminal());
    assert!(u32::from(result.black_count) + u32::from(result.white_count) <= 64);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn off_board_and_out_of_turn_submissions_change_nothing() {
    let mut game = GameInstance::with_default_selector(&GameConfig::default());
    let before = game.to_game_state();

    assert_eq!(game.submit_move(8, 3), SubmitOutcome::Ignored);
    assert_eq!(game.submit_move(3, 8), SubmitOutcome::Ignored);
    assert_eq!(game.to_game_state(), before);

    assert!(matches!(game.submit_move(2, 3), SubmitOutcome::Applied(_)));
    let after_move = game.to_game_state();
    assert_eq!(game.submit_move(2, 2), SubmitOutcome::Ignored);
    assert_eq!(game.to_game_state(), after_move);
}

#[test]
fn computer_can_play_black() {
    let config = GameConfig {
        human: Player::White,
        ..GameConfig::default()
    };
    let mut game = GameInstance::new(&config, Box::new(FirstLegalSelector));

    assert!(game.is_ai_turn());
    assert_eq!(game.submit_move(3, 2), SubmitOutcome::Ignored);
    assert_eq!(game.board().count(), (2, 2));
    assert_eq!(game.do_ai_move(), Ok(TurnOutcome::Move(Player::White)));
    assert_eq!(game.board().cell(at(3, 2)), Cell::Black);
}
