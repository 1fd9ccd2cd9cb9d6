use super::*;
use rand::SeedableRng;

fn play(moves: &[u8]) -> State {
    moves
        .iter()
        .fold(State::new(), |state, &pos| state.make_move(pos))
}

#[test]
fn test_initial_state() {
    let state = State::new();
    assert_eq!(state.board, [0; 9]);
    assert_eq!(state.current_player, 1);
    assert_eq!(state.winner(), Winner::Undecided);
    assert!(!state.is_done());
}

#[test]
fn test_new_with_player() {
    assert_eq!(State::new_with_player(2).current_player, 2);
    assert_eq!(State::new_with_player(1).current_player, 1);
    // Out-of-range players fall back to X
    assert_eq!(State::new_with_player(0).current_player, 1);
}

#[test]
fn test_legal_moves() {
    let state = State::new();
    assert_eq!(state.legal_moves(), (0..9).collect::<Vec<_>>());

    // After one move
    let state = state.make_move(4); // Center
    let legal = state.legal_moves();
    assert_eq!(legal.len(), 8);
    assert!(!legal.contains(&4));
}

#[test]
fn test_make_move() {
    let state = State::new();
    let new_state = state.make_move(4); // X places in center

    assert_eq!(new_state.board[4], 1);
    assert_eq!(new_state.current_player, 2); // Now O's turn
    assert!(!new_state.is_done());
}

#[test]
fn test_invalid_move() {
    let state_with_move = State::new().make_move(4);

    // Try to place in same position
    assert_eq!(state_with_move.make_move(4), state_with_move);
    // Off the board
    assert_eq!(state_with_move.make_move(9), state_with_move);
}

#[test]
fn test_winning_game() {
    // X wins with top row
    let state = play(&[0, 3, 1, 4, 2]);

    assert_eq!(state.winner(), Winner::Player(PlayerId::ONE));
    assert!(state.is_done());
    assert!(state.legal_moves().is_empty());
    // No further moves are accepted
    assert_eq!(state.make_move(8), state);
}

#[test]
fn test_draw_game() {
    // X O X / X O O / O X X
    let state = State::from_cells([1, 2, 1, 1, 2, 2, 2, 1, 1], 2);
    assert_eq!(state.winner(), Winner::Tie);
    assert!(state.is_done());
    assert!(state.legal_moves().is_empty());
}

/// All 8 winning lines should be detected correctly
#[test]
fn test_all_winning_lines() {
    for (line_idx, line) in LINES.iter().enumerate() {
        for player in [1u8, 2] {
            let mut board = [0u8; 9];
            for &pos in line {
                board[pos] = player;
            }
            assert_eq!(
                State::check_winner(&board),
                Winner::Player(PlayerId::new(player).unwrap()),
                "player {} should win on line {}: {:?}",
                player,
                line_idx,
                line
            );
        }
    }
}

/// A completed line on a full board is a win, not a draw
#[test]
fn test_full_board_with_line_is_win() {
    // X X X / O O X / X O O
    let board = [1, 1, 1, 2, 2, 1, 1, 2, 2];
    assert_eq!(State::check_winner(&board), Winner::Player(PlayerId::ONE));
}

#[test]
fn test_board_trait_start_randomizes_first_mover() {
    let game = TicTacToe::new();
    let mut seen = [false; 2];
    for seed in 0..32 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let state = game.start(&mut rng);
        assert_eq!(state.board, [0; 9]);
        seen[(state.current_player - 1) as usize] = true;
    }
    assert!(seen[0] && seen[1]);
}

#[test]
fn test_board_trait_uses_last_state() {
    let game = TicTacToe::new();
    let first = State::new();
    let second = first.make_move(0);

    assert_eq!(game.legal_plays(&[first, second]).len(), 8);
    assert_eq!(game.current_player(&second), PlayerId::TWO);
    assert_eq!(game.next_state(&second, &4), second.make_move(4));
    assert_eq!(game.winner(&[first, second]), Winner::Undecided);
}

#[test]
fn test_board_trait_empty_history() {
    let game = TicTacToe::new();
    assert!(game.legal_plays(&[]).is_empty());
    assert_eq!(game.winner(&[]), Winner::Undecided);
}

#[test]
fn test_winner_uses_tie_sentinel() {
    let game = TicTacToe::new();
    let draw = State::from_cells([1, 2, 1, 2, 1, 1, 2, 1, 2], 2);
    assert_eq!(game.winner(&[draw]).code(), Winner::TIE_CODE);
}

// =========================================================================
// Fuzz-style tests with random seeds/actions
// =========================================================================

/// Play many random games and verify invariants hold
#[test]
fn test_random_games_invariants() {
    use rand::Rng;

    let game = TicTacToe::new();
    for seed in 0..50 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut history = vec![game.start(&mut rng)];

        while !game.winner(&history).is_decided() {
            let legal = game.legal_plays(&history);
            assert!(
                !legal.is_empty(),
                "Undecided game must have legal moves (seed={}, moves={})",
                seed,
                history.len() - 1
            );

            let state = *history.last().unwrap();
            let pos = legal[rng.gen_range(0..legal.len())];
            let next = game.next_state(&state, &pos);

            assert_ne!(
                next.current_player, state.current_player,
                "Player should switch after move (seed={})",
                seed
            );
            assert_eq!(
                next.board.iter().filter(|&&c| c != 0).count(),
                state.board.iter().filter(|&&c| c != 0).count() + 1
            );
            history.push(next);
        }

        // Game should finish within 9 moves
        assert!(history.len() <= 10, "Game too long (seed={})", seed);
        assert!(game.legal_plays(&history).is_empty());
    }
}
