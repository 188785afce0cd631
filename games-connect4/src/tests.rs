use super::*;

const EMPTY_ROW: &str = ".......";

fn board(rows: [&str; ROWS], to_move: Player) -> Connect4 {
    Connect4::from_rows(&rows, to_move).unwrap()
}

#[test]
fn test_initial_state() {
    let state = Connect4::new();
    assert_eq!(state.current_player(), Player::One);
    assert!(!state.is_terminal());
    assert_eq!(state.score(), 0.0);
    assert_eq!(state.valid_actions(), (0..COLS).collect::<Vec<_>>());
    assert_eq!(state.rows(), vec![EMPTY_ROW; ROWS]);
}

#[test]
fn test_round_trip_empty_board() {
    let rows = vec![EMPTY_ROW; ROWS];
    let state = Connect4::from_rows(&rows, Player::One).unwrap();
    assert_eq!(state.rows(), rows);
}

#[test]
fn test_round_trip_mid_position() {
    let rows = [
        ".oxoo..",
        "...x...",
        "...x...",
        "...o...",
        "...x...",
        ".......",
    ];
    for to_move in [Player::One, Player::Two] {
        let state = Connect4::from_rows(&rows, to_move).unwrap();
        assert_eq!(state.rows(), rows);
        assert_eq!(state.current_player(), to_move);
    }
}

#[test]
fn test_apply_drops_to_lowest_empty_cell() {
    let state = Connect4::new();
    let state = state.apply(3).unwrap();
    let state = state.apply(3).unwrap();
    let state = state.apply(4).unwrap();

    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.rows()[0], "...xx..");
    assert_eq!(state.rows()[1], "...o...");
}

#[test]
fn test_apply_does_not_mutate_receiver() {
    let state = Connect4::new();
    let _ = state.apply(0).unwrap();
    assert_eq!(state, Connect4::new());
}

#[test]
fn test_player_alternates() {
    let state = Connect4::new();
    assert_eq!(state.current_player(), Player::One);
    let state = state.apply(0).unwrap();
    assert_eq!(state.current_player(), Player::Two);
    let state = state.apply(0).unwrap();
    assert_eq!(state.current_player(), Player::One);
}

#[test]
fn test_full_column_rejects_moves() {
    let mut state = Connect4::new();
    for _ in 0..ROWS {
        state = state.apply(0).unwrap();
    }

    assert!(!state.is_valid_action(0));
    assert_eq!(state.valid_actions(), (1..COLS).collect::<Vec<_>>());
    assert!(state.apply(0).is_err());
}

#[test]
fn test_full_column_from_literal() {
    // Only column 0 carries discs, stacked x x o o x x: full but no win.
    let rows = [
        "x......",
        "x......",
        "o......",
        "o......",
        "x......",
        "x......",
    ];
    let state = board(rows, Player::One);

    assert!(!state.is_valid_action(0));
    for col in 1..COLS {
        assert!(state.is_valid_action(col));
    }
    assert!(!state.is_terminal());
}

#[test]
fn test_out_of_range_column() {
    let state = Connect4::new();
    let err = state.apply(COLS).unwrap_err();
    assert_eq!(err, InvalidAction::new("column 7"));
}

#[test]
fn test_sentinel_keeps_columns_separate() {
    // Dropping into the column next to a full one must not leak a carry.
    let mut state = Connect4::new();
    for _ in 0..ROWS {
        state = state.apply(0).unwrap();
    }
    let state = state.apply(1).unwrap();

    assert_eq!(state.rows()[0], "xx.....");
    assert!(state.is_valid_action(1));
}

#[test]
fn test_horizontal_win_completes_bottom_row() {
    // Player one completes columns 3-6 of the bottom row by playing 6.
    let rows = [
        ".ooxxx.",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let state = board(rows, Player::One);
    assert!(!state.is_terminal());

    let won = state.apply(6).unwrap();
    assert!(won.is_terminal());
    // Score is read from the perspective of the player now to move, so a
    // win by player one reports +1.
    assert_eq!(won.score(), 1.0);
    assert!(won.valid_actions().is_empty());
}

#[test]
fn test_vertical_win() {
    let rows = [
        "o.x...o",
        "o.x....",
        "..x....",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let state = board(rows, Player::One);

    let won = state.apply(2).unwrap();
    assert!(won.is_terminal());
    assert_eq!(won.score(), 1.0);
}

#[test]
fn test_diagonal_win_ascending() {
    // Player one holds (0,0), (1,1), (2,2); dropping into column 3 lands
    // on row 3 and completes the rising diagonal.
    let rows = [
        "xooxo..",
        ".xoo...",
        "..xx...",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let state = board(rows, Player::One);
    assert!(!state.is_terminal());

    let won = state.apply(3).unwrap();
    assert!(won.is_terminal());
    assert_eq!(won.score(), 1.0);
}

#[test]
fn test_diagonal_win_descending() {
    // Player one holds (0,3), (1,2), (2,1); dropping into the empty
    // column 3 lands on row 0 and completes the falling diagonal.
    let rows = [
        "xoo..o.",
        "oxx....",
        "ox.....",
        "x......",
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let state = board(rows, Player::One);
    assert!(!state.is_terminal());

    let won = state.apply(3).unwrap();
    assert!(won.is_terminal());
    assert_eq!(won.score(), 1.0);
}

#[test]
fn test_win_by_player_two_scores_negative() {
    let rows = [
        "xx.ooox",
        "x......",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let state = board(rows, Player::Two);

    let won = state.apply(2).unwrap();
    assert!(won.is_terminal());
    assert_eq!(won.score(), -1.0);
}

#[test]
fn test_moves_rejected_after_win() {
    let rows = [
        ".ooxxx.",
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
        EMPTY_ROW,
    ];
    let won = board(rows, Player::One).apply(6).unwrap();

    // Column 0 is physically open but the game is over.
    assert!(won.apply(0).is_err());
}

#[test]
fn test_full_board_draw() {
    let rows = [
        "xoxoxox",
        "xoxoxox",
        "oxoxoxo",
        "oxoxoxo",
        "xoxoxox",
        "xoxoxox",
    ];
    let state = board(rows, Player::One);

    assert!(state.is_terminal());
    assert_eq!(state.score(), 0.0);
    assert!(state.valid_actions().is_empty());
}

#[test]
fn test_shape_errors() {
    let too_few = vec![EMPTY_ROW; ROWS - 1];
    assert_eq!(
        Connect4::from_rows(&too_few, Player::One),
        Err(ParseBoardError::WrongRowCount {
            expected: ROWS,
            actual: ROWS - 1,
        })
    );

    let mut bad_width = vec![EMPTY_ROW; ROWS];
    bad_width[2] = "......";
    assert_eq!(
        Connect4::from_rows(&bad_width, Player::One),
        Err(ParseBoardError::WrongRowWidth {
            row: 2,
            expected: COLS,
            actual: COLS - 1,
        })
    );

    bad_width[2] = "........";
    assert_eq!(
        Connect4::from_rows(&bad_width, Player::One),
        Err(ParseBoardError::WrongRowWidth {
            row: 2,
            expected: COLS,
            actual: COLS + 1,
        })
    );
}

#[test]
fn test_display_prints_top_row_first() {
    let state = Connect4::new().apply(3).unwrap();
    let rendered = state.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), ROWS);
    assert_eq!(lines[ROWS - 1], "...x...");
    assert_eq!(lines[0], EMPTY_ROW);
}

#[test]
fn test_random_playouts_reach_terminal_states() {
    // A playout along any legal action sequence must end within 42 moves,
    // and the invariants hold at every step.
    let mut state = Connect4::new();
    let mut moves = 0;

    while !state.is_terminal() {
        let actions = state.valid_actions();
        assert!(!actions.is_empty());
        // Cycle through columns deterministically.
        let action = actions[moves % actions.len()];
        let prev = state.current_player();
        state = state.apply(action).unwrap();
        assert_eq!(state.current_player(), prev.opponent());
        moves += 1;
        assert!(moves <= ROWS * COLS);
    }

    assert!(state.valid_actions().is_empty());
}
